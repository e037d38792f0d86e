use std::sync::{Arc, Mutex};

use sb_common::{ClientId, EngineError, Rect};
use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::engine::EngineSettings;
use crate::history::NavigationHistory;
use crate::ipc::{IPC_INIT_SCRIPT, PAGE_HOOKS_SCRIPT};
use crate::scripts;

use super::bounds::rect_to_wry;
use super::engine_view::WryEngine;
use super::surface::SurfaceHandle;
use super::types::SurfaceConfig;
use super::WebViewManager;

const BLANK_PAGE: &str = "<html><head><title></title></head><body></body></html>";

/// Native zoom hotkeys stay off: zoom keys reach the app as shortcuts and
/// `Engine::zoom_*` is the only path that changes a view's zoom.
pub(super) const NATIVE_HOTKEY_ZOOM: bool = false;

impl WebViewManager {
    /// Create a page view for tab `id` as a child of `window`.
    ///
    /// The view starts hidden on a blank document; the caller loads a URI
    /// and shows it once it becomes the active tab.
    pub fn create_view<W: raw_window_handle::HasWindowHandle>(
        &self,
        id: ClientId,
        window: &W,
        bounds: Rect,
        settings: &EngineSettings,
    ) -> Result<WryEngine, EngineError> {
        let history = Arc::new(Mutex::new(NavigationHistory::new()));
        log_unsupported_settings(id, settings);

        let mut builder = WebViewBuilder::new()
            .with_bounds(rect_to_wry(&bounds))
            .with_visible(false)
            .with_focused(false)
            .with_transparent(settings.transparent_background)
            .with_devtools(settings.enable_inspector)
            .with_clipboard(true)
            .with_hotkeys_zoom(NATIVE_HOTKEY_ZOOM)
            .with_initialization_script(IPC_INIT_SCRIPT)
            .with_initialization_script(PAGE_HOOKS_SCRIPT);

        if settings.smooth_scrolling {
            builder = builder
                .with_initialization_script(&scripts::smooth_scrolling_on_load(true));
        }
        if let Some(ua) = &settings.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_page_ipc_handler(builder, Arc::clone(&self.events), id);
        builder = Self::attach_page_load_handler(
            builder,
            Arc::clone(&self.events),
            Arc::clone(&history),
            id,
        );
        builder = Self::attach_title_handler(builder, Arc::clone(&self.events), id);
        builder = Self::attach_navigation_handler(builder, id);
        builder = Self::attach_new_window_handler(builder, Arc::clone(&self.events), id);
        builder = self.attach_download_handlers(builder, id);

        let webview = builder
            .with_html(BLANK_PAGE)
            .build_as_child(window)
            .map_err(|e| EngineError::Create(e.to_string()))?;

        debug!(client_id = id.0, "page view created");
        Ok(WryEngine::new(webview, id, history, settings.clone()))
    }

    /// Create a chrome surface rendering `config.html`.
    pub fn create_surface<W: raw_window_handle::HasWindowHandle>(
        &self,
        name: &'static str,
        window: &W,
        bounds: Rect,
        config: SurfaceConfig,
    ) -> Result<SurfaceHandle, EngineError> {
        let builder = WebViewBuilder::new()
            .with_bounds(rect_to_wry(&bounds))
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_focused(false)
            .with_initialization_script(IPC_INIT_SCRIPT);
        let builder = self.attach_surface_ipc_handler(builder, name);

        let webview = builder
            .with_html(&config.html)
            .build_as_child(window)
            .map_err(|e| EngineError::Create(e.to_string()))?;

        debug!(surface = name, "chrome surface created");
        Ok(SurfaceHandle::new(webview, name))
    }
}

/// wry exposes no switches for these; they are accepted and reported.
fn log_unsupported_settings(id: ClientId, settings: &EngineSettings) {
    let defaults = EngineSettings::default();
    let flags = [
        ("auto_load_images", settings.auto_load_images, defaults.auto_load_images),
        ("enable_plugins", settings.enable_plugins, defaults.enable_plugins),
        ("enable_scripts", settings.enable_scripts, defaults.enable_scripts),
        (
            "enable_spatial_navigation",
            settings.enable_spatial_navigation,
            defaults.enable_spatial_navigation,
        ),
        (
            "enable_spell_checking",
            settings.enable_spell_checking,
            defaults.enable_spell_checking,
        ),
    ];
    for (name, value, default) in flags {
        if value != default {
            debug!(client_id = id.0, setting = name, value, "setting not supported by wry backend, ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ipc::page_event_from_ipc;
    use crate::{EventKind, IpcMessage, KeyPress};

    #[test]
    fn zoom_keys_are_app_shortcuts_not_native_zoom() {
        assert!(!NATIVE_HOTKEY_ZOOM);

        // The page hook forwards Ctrl+= for the app's ZoomIn binding.
        let msg = IpcMessage::from_json(
            r#"{"kind":"key","payload":{"key":"=","ctrl":true}}"#,
        )
        .unwrap();
        let Some(EventKind::KeyPressed(KeyPress { key, ctrl, .. })) = page_event_from_ipc(&msg)
        else {
            panic!("zoom key not forwarded");
        };
        assert_eq!(key, "=");
        assert!(ctrl);
    }
}
