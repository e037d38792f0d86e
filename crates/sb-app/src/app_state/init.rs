//! Window creation, chrome surfaces and the first tab.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use sb_engine::webview::{SurfaceConfig, WryFactory};
use sb_engine::Engine;
use sb_tabs::sync::APP_NAME;
use sb_tabs::ClientRegistry;

use super::chrome_bridge::{menu_entries, WebChrome, STATUS_HTML, TOOLBAR_HTML};
use super::core::SbApp;
use super::layout::Layout;
use super::types::{STATUS_SURFACE, TOOLBAR_SURFACE};

impl SbApp {
    /// Create the window, the chrome surfaces and the first tab.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(APP_NAME)
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(self.config.window.width),
                f64::from(self.config.window.height),
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };
        let layout = self.layout_for(&window);

        let toolbar = self.manager.create_surface(
            TOOLBAR_SURFACE,
            window.as_ref(),
            layout.toolbar,
            SurfaceConfig::with_html(TOOLBAR_HTML),
        );
        let status = self.manager.create_surface(
            STATUS_SURFACE,
            window.as_ref(),
            layout.status,
            SurfaceConfig::with_html(STATUS_HTML),
        );
        let chrome = match (toolbar, status) {
            (Ok(toolbar), Ok(status)) => WebChrome::new(Arc::clone(&window), toolbar, status),
            (Err(e), _) | (_, Err(e)) => {
                tracing::error!("Failed to create browser chrome: {e}");
                return false;
            }
        };
        chrome.set_bounds(layout.toolbar, layout.status);

        let mut factory = WryFactory::new(&self.manager, window.as_ref(), layout.content);
        let mut registry = match ClientRegistry::new(&mut factory, &self.engine_settings) {
            Ok(registry) => registry,
            Err(e) => {
                tracing::error!("Failed to create first tab: {e}");
                return false;
            }
        };

        if let Some(uri) = self.first_uri.take() {
            if let Some(client) = registry.active_mut() {
                tracing::info!(client_id = client.id.0, url = %uri, "Loading first page");
                if let Err(e) = client.view.load(&uri) {
                    tracing::warn!(client_id = client.id.0, error = %e, "Initial load failed");
                }
            }
        }

        self.window = Some(window);
        self.chrome = Some(chrome);
        self.registry = Some(registry);
        self.show_active_tab();
        self.refresh_chrome();

        tracing::info!("Window created and first tab opened");
        true
    }

    /// Current layout of the window's logical area.
    pub(super) fn layout_for(&self, window: &Window) -> Layout {
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        Layout::compute(size.width, size.height, &self.config.window)
    }

    /// Current layout, or `None` before the window exists.
    pub(super) fn layout(&self) -> Option<Layout> {
        self.window.as_deref().map(|w| self.layout_for(w))
    }

    /// Send the chrome everything it shows: menu plus full tab state.
    pub(super) fn initialize_chrome(&mut self) {
        if let Some(chrome) = &self.chrome {
            chrome.set_menu(&menu_entries(&self.keybinds));
        }
        self.refresh_chrome();
    }
}
