use sb_common::{ClientId, EngineError, Rect};
use wry::raw_window_handle;

use crate::engine::{EngineFactory, EngineSettings};

use super::engine_view::WryEngine;
use super::WebViewManager;

/// Builds tab views inside one window at the current content rect.
pub struct WryFactory<'a, W> {
    manager: &'a WebViewManager,
    window: &'a W,
    bounds: Rect,
}

impl<'a, W: raw_window_handle::HasWindowHandle> WryFactory<'a, W> {
    pub fn new(manager: &'a WebViewManager, window: &'a W, bounds: Rect) -> Self {
        Self {
            manager,
            window,
            bounds,
        }
    }
}

impl<W: raw_window_handle::HasWindowHandle> EngineFactory for WryFactory<'_, W> {
    type View = WryEngine;

    fn create_view(
        &mut self,
        id: ClientId,
        settings: &EngineSettings,
    ) -> Result<WryEngine, EngineError> {
        self.manager.create_view(id, self.window, self.bounds, settings)
    }
}
