//! Window geometry configuration.

use serde::{Deserialize, Serialize};

/// Initial window size and the height of the chrome strips, in logical
/// pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Valid range: 200-16384.
    pub width: u32,
    /// Valid range: 150-16384.
    pub height: u32,
    /// Tab strip + toolbar (valid range: 32-200).
    pub toolbar_height: u32,
    /// Valid range: 0-64. Zero hides the status bar.
    pub status_bar_height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            toolbar_height: 76,
            status_bar_height: 22,
        }
    }
}
