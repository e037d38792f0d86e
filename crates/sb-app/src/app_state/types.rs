//! Internal constants for the app state module.

use std::time::Duration;

/// How often to poll for engine and chrome events (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// Surface names, as reported back in chrome IPC messages.
pub(super) const TOOLBAR_SURFACE: &str = "toolbar";
pub(super) const STATUS_SURFACE: &str = "status";

/// `SelectTabIndex` value bound to the "last tab" shortcut.
pub(super) const LAST_TAB_SHORTCUT: usize = 8;
