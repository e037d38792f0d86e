use std::sync::{Arc, Mutex};

use sb_common::{ClientId, EditCommand, EngineError, Rect};
use tracing::debug;
use wry::WebView;

use crate::engine::{Engine, EngineSettings, SearchOptions};
use crate::history::NavigationHistory;
use crate::scripts;

use super::bounds::rect_to_wry;

/// A tab's page view on top of `wry::WebView`.
///
/// Back/forward state comes from a [`NavigationHistory`] shared with the
/// page-load handler; find, edit and text zoom go through script
/// evaluation.
pub struct WryEngine {
    webview: WebView,
    id: ClientId,
    history: Arc<Mutex<NavigationHistory>>,
    settings: EngineSettings,
    zoom: f64,
    inspecting: bool,
}

fn command_err(e: wry::Error) -> EngineError {
    EngineError::Command(e.to_string())
}

impl WryEngine {
    pub(super) fn new(
        webview: WebView,
        id: ClientId,
        history: Arc<Mutex<NavigationHistory>>,
        settings: EngineSettings,
    ) -> Self {
        Self {
            webview,
            id,
            history,
            settings,
            zoom: 1.0,
            inspecting: false,
        }
    }

    fn eval(&self, js: &str) -> Result<(), EngineError> {
        self.webview.evaluate_script(js).map_err(command_err)
    }

    fn with_history<T>(&self, f: impl FnOnce(&mut NavigationHistory) -> T) -> Option<T> {
        self.history.lock().ok().map(|mut h| f(&mut h))
    }
}

impl Engine for WryEngine {
    fn can_go_back(&self) -> bool {
        self.with_history(|h| h.can_go_back()).unwrap_or(false)
    }

    fn can_go_forward(&self) -> bool {
        self.with_history(|h| h.can_go_forward()).unwrap_or(false)
    }

    fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    fn zoom_level(&self) -> f64 {
        self.zoom
    }

    fn load(&mut self, uri: &str) -> Result<(), EngineError> {
        debug!(client_id = self.id.0, url = %uri, "load");
        self.webview.load_url(uri).map_err(command_err)
    }

    fn reload(&mut self) -> Result<(), EngineError> {
        self.webview.reload().map_err(command_err)
    }

    fn go_back(&mut self) -> Result<(), EngineError> {
        if self.with_history(|h| h.begin_back()).unwrap_or(false) {
            self.eval(scripts::history_back())?;
        }
        Ok(())
    }

    fn go_forward(&mut self) -> Result<(), EngineError> {
        if self.with_history(|h| h.begin_forward()).unwrap_or(false) {
            self.eval(scripts::history_forward())?;
        }
        Ok(())
    }

    fn search_text(&mut self, query: &str, options: SearchOptions) -> Result<(), EngineError> {
        if query.is_empty() {
            return Ok(());
        }
        self.eval(&scripts::find(query, options))
    }

    fn set_zoom_level(&mut self, level: f64) -> Result<(), EngineError> {
        if self.settings.full_content_zoom {
            self.webview.zoom(level).map_err(command_err)?;
        } else {
            self.eval(&scripts::text_zoom(level))?;
        }
        self.zoom = level;
        debug!(client_id = self.id.0, zoom = level, "zoom changed");
        Ok(())
    }

    fn set_settings(&mut self, settings: EngineSettings) -> Result<(), EngineError> {
        if settings.smooth_scrolling != self.settings.smooth_scrolling {
            self.eval(&scripts::smooth_scrolling(settings.smooth_scrolling))?;
        }
        if !settings.enable_inspector && self.inspecting {
            self.webview.close_devtools();
            self.inspecting = false;
        }
        if settings.user_agent != self.settings.user_agent
            || settings.transparent_background != self.settings.transparent_background
        {
            debug!(client_id = self.id.0, "user agent and transparency apply to new tabs only");
        }
        self.settings = settings;
        Ok(())
    }

    fn edit(&mut self, command: EditCommand) -> Result<(), EngineError> {
        self.eval(&scripts::edit(command))
    }

    fn set_inspector(&mut self, open: bool) -> Result<(), EngineError> {
        if open && !self.settings.enable_inspector {
            return Err(EngineError::Unsupported("inspector is disabled in settings"));
        }
        if open {
            self.webview.open_devtools();
        } else {
            self.webview.close_devtools();
        }
        self.inspecting = open;
        Ok(())
    }

    fn set_bounds(&mut self, bounds: Rect) -> Result<(), EngineError> {
        self.webview.set_bounds(rect_to_wry(&bounds)).map_err(command_err)
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), EngineError> {
        self.webview.set_visible(visible).map_err(command_err)
    }

    fn focus(&mut self) -> Result<(), EngineError> {
        self.webview.focus().map_err(command_err)
    }
}
