//! SbApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use sb_common::FindRequest;
use sb_config::SbConfig;
use sb_engine::webview::{WebViewManager, WryEngine};
use sb_engine::EngineSettings;
use sb_platform::KeybindRegistry;
use sb_tabs::{ClientRegistry, Synchronizer};

use super::chrome_bridge::WebChrome;
use super::settings::engine_settings;

/// Top-level application state.
pub struct SbApp {
    pub(super) config: SbConfig,
    pub(super) keybinds: KeybindRegistry,
    /// Settings applied to newly created tabs.
    pub(super) engine_settings: EngineSettings,
    /// Loaded into the first tab once the window exists.
    pub(super) first_uri: Option<String>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) manager: WebViewManager,
    pub(super) chrome: Option<WebChrome>,

    // Tabs
    pub(super) registry: Option<ClientRegistry<WryEngine>>,
    pub(super) sync: Synchronizer,
    pub(super) last_find: Option<FindRequest>,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    pub(super) should_exit: bool,
    /// Startup failed; the process exits non-zero.
    pub(super) failed: bool,
    pub(super) last_poll: Instant,
}

impl SbApp {
    pub fn new(config: SbConfig, keybinds: KeybindRegistry, first_uri: String) -> Self {
        let download_dir = sb_platform::download_dir(config.downloads.directory.as_ref())
            .unwrap_or_else(|e| {
                let fallback = std::env::temp_dir();
                tracing::warn!(
                    "No download directory ({e}), saving to {}",
                    fallback.display()
                );
                fallback
            });
        tracing::info!(dir = %download_dir.display(), "Download directory");

        Self {
            engine_settings: engine_settings(&config.web),
            sync: Synchronizer::new(config.tabs.label_max_chars as usize),
            config,
            keybinds,
            first_uri: Some(first_uri),
            window: None,
            manager: WebViewManager::new(download_dir),
            chrome: None,
            registry: None,
            last_find: None,
            modifiers: winit::keyboard::ModifiersState::empty(),
            should_exit: false,
            failed: false,
            last_poll: Instant::now(),
        }
    }

    pub fn failed(&self) -> bool {
        self.failed
    }
}

#[cfg(test)]
pub(super) fn test_app() -> SbApp {
    let config = SbConfig::default();
    let keybinds = KeybindRegistry::from_config(&config.keybinds);
    SbApp::new(config, keybinds, "about:blank".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_app_has_no_window_or_tabs() {
        let app = test_app();
        assert!(app.window.is_none());
        assert!(app.registry.is_none());
        assert!(app.chrome.is_none());
        assert!(!app.should_exit);
        assert!(!app.failed());
        assert_eq!(app.first_uri.as_deref(), Some("about:blank"));
    }

    #[test]
    fn engine_settings_follow_web_config() {
        let mut config = SbConfig::default();
        config.web.smooth_scrolling = true;
        config.web.zoom_step = 0.25;
        let keybinds = KeybindRegistry::from_config(&config.keybinds);
        let app = SbApp::new(config, keybinds, String::new());
        assert!(app.engine_settings.smooth_scrolling);
        assert!((app.engine_settings.zoom_step - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn configured_download_directory_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SbConfig::default();
        config.downloads.directory = Some(dir.path().to_path_buf());
        let keybinds = KeybindRegistry::from_config(&config.keybinds);
        let app = SbApp::new(config, keybinds, String::new());
        assert_eq!(app.manager.download_dir(), dir.path());
    }
}
