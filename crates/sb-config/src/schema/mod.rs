//! Configuration schema types for sb.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the browser ships with.

mod downloads;
mod general;
mod keybind_config;
mod system;
mod tabs;
mod web;
mod window;

pub use downloads::*;
pub use general::*;
pub use keybind_config::*;
pub use system::*;
pub use tabs::*;
pub use web::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for sb.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SbConfig {
    pub general: GeneralConfig,
    pub web: WebConfig,
    pub downloads: DownloadsConfig,
    pub tabs: TabsConfig,
    pub window: WindowConfig,
    pub keybinds: KeybindConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
