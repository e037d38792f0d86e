//! The `Engine` and `EngineFactory` traits.

use sb_common::{ClientId, EditCommand, EngineError, Rect};
use serde::{Deserialize, Serialize};

/// Smallest zoom level reachable with zoom-out.
pub const ZOOM_MIN: f64 = 0.25;
/// Largest zoom level reachable with zoom-in.
pub const ZOOM_MAX: f64 = 5.0;

/// Options of a find-in-page search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub case_sensitive: bool,
    pub forward: bool,
    pub wrap: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            forward: true,
            wrap: true,
        }
    }
}

/// Per-view engine settings, applied when a view is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    pub user_agent: Option<String>,
    pub auto_load_images: bool,
    pub enable_plugins: bool,
    pub enable_scripts: bool,
    pub enable_spatial_navigation: bool,
    pub enable_spell_checking: bool,
    pub enable_inspector: bool,
    pub transparent_background: bool,
    pub full_content_zoom: bool,
    pub smooth_scrolling: bool,
    pub zoom_step: f64,
}

impl Default for EngineSettings {
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

/// Zoom level after one step in `direction` (`1.0` in, `-1.0` out),
/// clamped to [`ZOOM_MIN`, `ZOOM_MAX`] and rounded to two decimals so
/// repeated steps do not drift.
pub fn step_zoom(current: f64, step: f64, direction: f64) -> f64 {
    let next = (current + step * direction).clamp(ZOOM_MIN, ZOOM_MAX);
    (next * 100.0).round() / 100.0
}

/// One embedded web view.
///
/// Queries are answered synchronously from state the backend already
/// holds. Commands are fire-and-forget: their effects arrive later as
/// [`EngineEvent`](crate::EngineEvent)s.
pub trait Engine {
    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    fn settings(&self) -> &EngineSettings;
    fn zoom_level(&self) -> f64;

    fn load(&mut self, uri: &str) -> Result<(), EngineError>;
    fn reload(&mut self) -> Result<(), EngineError>;
    fn go_back(&mut self) -> Result<(), EngineError>;
    fn go_forward(&mut self) -> Result<(), EngineError>;
    fn search_text(&mut self, query: &str, options: SearchOptions) -> Result<(), EngineError>;
    fn set_zoom_level(&mut self, level: f64) -> Result<(), EngineError>;
    fn set_settings(&mut self, settings: EngineSettings) -> Result<(), EngineError>;
    fn edit(&mut self, command: EditCommand) -> Result<(), EngineError>;
    fn set_inspector(&mut self, open: bool) -> Result<(), EngineError>;
    fn set_bounds(&mut self, bounds: Rect) -> Result<(), EngineError>;
    fn set_visible(&mut self, visible: bool) -> Result<(), EngineError>;
    fn focus(&mut self) -> Result<(), EngineError>;

    fn zoom_in(&mut self) -> Result<(), EngineError> {
        let level = step_zoom(self.zoom_level(), self.settings().zoom_step, 1.0);
        self.set_zoom_level(level)
    }

    fn zoom_out(&mut self) -> Result<(), EngineError> {
        let level = step_zoom(self.zoom_level(), self.settings().zoom_step, -1.0);
        self.set_zoom_level(level)
    }

    fn zoom_reset(&mut self) -> Result<(), EngineError> {
        self.set_zoom_level(1.0)
    }
}

/// Allocates engine views for the tab registry.
///
/// Implementations wire the new view's callbacks so that every
/// notification it emits carries `id`.
pub trait EngineFactory {
    type View: Engine;

    fn create_view(
        &mut self,
        id: ClientId,
        settings: &EngineSettings,
    ) -> Result<Self::View, EngineError>;
}
