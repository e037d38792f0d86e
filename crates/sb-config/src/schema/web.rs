//! Web engine settings applied to every new view.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Custom user agent. `None` keeps the engine's own.
    pub user_agent: Option<String>,
    pub auto_load_images: bool,
    pub enable_plugins: bool,
    pub enable_scripts: bool,
    pub enable_spatial_navigation: bool,
    pub enable_spell_checking: bool,
    /// Allow the developer inspector to be attached to tabs.
    pub enable_inspector: bool,
    pub transparent_background: bool,
    /// Zoom whole pages (true) or only text (false).
    pub full_content_zoom: bool,
    pub smooth_scrolling: bool,
    /// Zoom change per zoom-in / zoom-out (valid range: 0.01-1.0).
    pub zoom_step: f64,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            user_agent: None,
            auto_load_images: true,
            enable_plugins: false,
            enable_scripts: true,
            enable_spatial_navigation: false,
            enable_spell_checking: false,
            enable_inspector: true,
            transparent_background: false,
            full_content_zoom: true,
            smooth_scrolling: false,
            zoom_step: 0.1,
        }
    }
}
