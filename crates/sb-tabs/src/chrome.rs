//! The browser UI as seen by the synchronizer.

use sb_common::ClientId;
use serde::Serialize;

/// One entry of the tab strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabEntry {
    pub id: ClientId,
    pub label: String,
    pub active: bool,
    /// Load in progress (progress below 100).
    pub loading: bool,
}

/// Sensitivity of the back and forward buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

/// Chrome widgets driven from tab state.
///
/// Implementations swallow their own delivery errors.
pub trait Chrome {
    fn set_title(&mut self, title: &str);
    fn set_address(&mut self, uri: &str);
    fn set_navigation_state(&mut self, state: NavigationState);
    fn set_tabs(&mut self, tabs: &[TabEntry]);
    /// `None` clears the status bar.
    fn set_status(&mut self, text: Option<&str>);
    fn set_inspecting(&mut self, inspecting: bool);
}
