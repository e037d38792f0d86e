//! General browser settings.

use serde::{Deserialize, Serialize};

/// Page loaded in the first tab and by the Home button.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub home_page: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            home_page: "https://duckduckgo.com/".into(),
        }
    }
}
