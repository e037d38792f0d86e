//! Tab behaviour.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// Keep the current tab focused when a new tab is opened.
    pub open_in_background: bool,
    /// Longest tab label before truncation (valid range: 4-128).
    pub label_max_chars: u32,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            open_in_background: false,
            label_max_chars: 24,
        }
    }
}
