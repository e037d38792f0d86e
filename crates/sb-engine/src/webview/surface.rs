use sb_common::{EngineError, Rect};
use wry::WebView;

use super::bounds::rect_to_wry;

/// A chrome surface: plain HTML driven over IPC.
pub struct SurfaceHandle {
    webview: WebView,
    name: &'static str,
}

fn command_err(e: wry::Error) -> EngineError {
    EngineError::Command(e.to_string())
}

impl SurfaceHandle {
    pub(super) fn new(webview: WebView, name: &'static str) -> Self {
        Self { webview, name }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Send a typed IPC message to the surface's JavaScript.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), EngineError> {
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.webview.evaluate_script(&script).map_err(command_err)
    }

    pub fn set_bounds(&self, bounds: Rect) -> Result<(), EngineError> {
        self.webview.set_bounds(rect_to_wry(&bounds)).map_err(command_err)
    }

    pub fn set_visible(&self, visible: bool) -> Result<(), EngineError> {
        self.webview.set_visible(visible).map_err(command_err)
    }

    pub fn focus(&self) -> Result<(), EngineError> {
        self.webview.focus().map_err(command_err)
    }
}
