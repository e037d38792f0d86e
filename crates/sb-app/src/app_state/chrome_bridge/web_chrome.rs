//! `Chrome` implementation backed by the window and the HTML surfaces.

use std::sync::Arc;

use serde_json::{json, Value};
use winit::window::Window;

use sb_common::Rect;
use sb_engine::webview::SurfaceHandle;
use sb_tabs::{Chrome, NavigationState, TabEntry};

use super::menu::MenuEntry;

pub(in crate::app_state) struct WebChrome {
    window: Arc<Window>,
    toolbar: SurfaceHandle,
    status: SurfaceHandle,
}

impl WebChrome {
    pub fn new(window: Arc<Window>, toolbar: SurfaceHandle, status: SurfaceHandle) -> Self {
        Self {
            window,
            toolbar,
            status,
        }
    }

    pub fn set_bounds(&self, toolbar: Rect, status: Rect) {
        for (surface, bounds) in [(&self.toolbar, toolbar), (&self.status, status)] {
            if let Err(e) = surface.set_bounds(bounds) {
                tracing::warn!(surface = surface.name(), error = %e, "Failed to resize chrome");
            }
        }
        if let Err(e) = self.status.set_visible(!status.is_empty()) {
            tracing::warn!(error = %e, "Failed to toggle status bar");
        }
    }

    pub fn set_menu(&self, entries: &[MenuEntry]) {
        match serde_json::to_value(entries) {
            Ok(value) => send(&self.toolbar, "menu", &value),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize menu"),
        }
    }

    /// Move keyboard focus to the address bar and select its text.
    pub fn focus_address(&self) {
        if let Err(e) = self.toolbar.focus() {
            tracing::warn!(error = %e, "Failed to focus toolbar");
        }
        send(&self.toolbar, "focus_address", &Value::Null);
    }

    /// Open the find bar and focus its input.
    pub fn show_find_bar(&self) {
        if let Err(e) = self.toolbar.focus() {
            tracing::warn!(error = %e, "Failed to focus toolbar");
        }
        send(&self.toolbar, "show_find", &Value::Null);
    }
}

fn send(surface: &SurfaceHandle, kind: &str, payload: &Value) {
    if let Err(e) = surface.send_ipc(kind, payload) {
        tracing::warn!(surface = surface.name(), kind, error = %e, "Chrome update failed");
    }
}

impl Chrome for WebChrome {
    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn set_address(&mut self, uri: &str) {
        send(&self.toolbar, "address", &json!(uri));
    }

    fn set_navigation_state(&mut self, state: NavigationState) {
        send(
            &self.toolbar,
            "nav_state",
            &json!({
                "can_go_back": state.can_go_back,
                "can_go_forward": state.can_go_forward,
            }),
        );
    }

    fn set_tabs(&mut self, tabs: &[TabEntry]) {
        match serde_json::to_value(tabs) {
            Ok(value) => send(&self.toolbar, "tabs", &value),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize tab strip"),
        }
    }

    fn set_status(&mut self, text: Option<&str>) {
        send(&self.status, "status", &json!(text));
    }

    fn set_inspecting(&mut self, inspecting: bool) {
        send(&self.toolbar, "inspecting", &json!(inspecting));
    }
}
