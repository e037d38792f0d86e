//! Action dispatch: routes resolved actions to the tab registry, the
//! active tab's engine view or the window.

use sb_common::{Action, ClientId, EngineError, FindRequest};
use sb_engine::webview::{WryEngine, WryFactory};
use sb_engine::{Engine, SearchOptions};
use sb_tabs::{Chrome, ClientRegistry, CloseOutcome, Placement};

use crate::uri::normalize_uri;

use super::core::SbApp;
use super::layout::Layout;
use super::types::LAST_TAB_SHORTCUT;

impl SbApp {
    /// Dispatch a resolved [`Action`].
    pub(super) fn dispatch(&mut self, action: Action) {
        match action {
            // -- Tabs --
            Action::NewTab => {
                let home = self.config.general.home_page.clone();
                self.open_tab(&home, self.new_tab_placement());
            }
            Action::CloseActiveTab => {
                if let Some(id) = self.registry.as_ref().map(|r| r.active_id()) {
                    self.close_tab(id);
                }
            }
            Action::CloseTab(id) => self.close_tab(ClientId(id)),
            Action::SelectTab(id) => {
                self.change_active(|r| r.set_active(ClientId(id)));
            }
            Action::SelectTabIndex(index) => {
                self.change_active(|r| {
                    let index = if index == LAST_TAB_SHORTCUT {
                        r.len().saturating_sub(1)
                    } else {
                        index
                    };
                    r.set_active_index(index)
                });
            }
            Action::NextTab => {
                self.change_active(|r| r.activate_next());
            }
            Action::PrevTab => {
                self.change_active(|r| r.activate_prev());
            }
            Action::MoveTab { id, to } => {
                if let Some(registry) = &mut self.registry {
                    if registry.move_client(ClientId(id), to) {
                        self.refresh_chrome();
                    }
                }
            }

            // -- Navigation --
            Action::Navigate(input) => {
                let uri = normalize_uri(&input);
                if uri.is_empty() {
                    return;
                }
                tracing::info!(url = %uri, "Navigate");
                self.with_active_view("load", |view| view.load(&uri));
            }
            Action::GoBack => self.with_active_view("go_back", |view| view.go_back()),
            Action::GoForward => self.with_active_view("go_forward", |view| view.go_forward()),
            Action::Reload => self.with_active_view("reload", |view| view.reload()),
            Action::GoHome => {
                let home = self.config.general.home_page.clone();
                self.with_active_view("load", |view| view.load(&home));
            }
            Action::FocusAddressBar => {
                if let Some(chrome) = &self.chrome {
                    chrome.focus_address();
                }
            }

            // -- Page --
            Action::Find(request) => self.find(request),
            Action::FindNext => self.find_again(true),
            Action::FindPrev => self.find_again(false),
            Action::ZoomIn => self.with_active_view("zoom_in", |view| view.zoom_in()),
            Action::ZoomOut => self.with_active_view("zoom_out", |view| view.zoom_out()),
            Action::ZoomReset => self.with_active_view("zoom_reset", |view| view.zoom_reset()),
            Action::Edit(command) => self.with_active_view("edit", |view| view.edit(command)),
            Action::ToggleInspector => self.toggle_inspector(),
            Action::ToggleSmoothScrolling => self.toggle_smooth_scrolling(),

            // -- Window --
            Action::ToggleFullscreen => {
                if let Some(ref w) = self.window {
                    if w.fullscreen().is_some() {
                        w.set_fullscreen(None);
                    } else {
                        w.set_fullscreen(Some(winit::window::Fullscreen::Borderless(None)));
                    }
                }
            }
            Action::About => {
                let text = format!(
                    "{} - {}",
                    crate::cli::version_line(),
                    env!("CARGO_PKG_DESCRIPTION")
                );
                self.notify(text);
            }
            Action::Quit => {
                tracing::info!("Quit requested");
                self.should_exit = true;
            }
            Action::None => {}
        }
    }

    pub(super) fn new_tab_placement(&self) -> Placement {
        Placement::from_background_flag(self.config.tabs.open_in_background)
    }

    /// Open `uri` in a new tab.
    ///
    /// A failed view allocation leaves the tabs unchanged and is reported in
    /// the status bar.
    pub(super) fn open_tab(&mut self, uri: &str, placement: Placement) {
        let (Some(window), Some(registry)) = (&self.window, &mut self.registry) else {
            tracing::warn!(url = %uri, "Cannot open tab: no window");
            return;
        };
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        let content = Layout::compute(size.width, size.height, &self.config.window).content;

        let mut factory = WryFactory::new(&self.manager, window.as_ref(), content);
        let id = match registry.create_client(&mut factory, &self.engine_settings, placement) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(url = %uri, error = %e, "Failed to open tab");
                self.notify(format!("Could not open a new tab: {e}"));
                return;
            }
        };

        if let Some(client) = registry.get_mut(id) {
            if let Err(e) = client.view.load(uri) {
                tracing::warn!(client_id = id.0, url = %uri, error = %e, "Load failed");
            }
        }

        if placement == Placement::Foreground {
            self.show_active_tab();
        }
        self.refresh_chrome();
    }

    fn close_tab(&mut self, id: ClientId) {
        let Some(registry) = &mut self.registry else {
            return;
        };
        match registry.close_client(id) {
            CloseOutcome::Closed => {
                self.show_active_tab();
                self.refresh_chrome();
            }
            CloseOutcome::LastClient => {
                tracing::info!(client_id = id.0, "Last tab closed, quitting");
                self.should_exit = true;
            }
            CloseOutcome::NotFound => {
                tracing::debug!(client_id = id.0, "Close ignored: no such tab");
            }
        }
    }

    /// Run a registry focus operation and resync if the active tab changed.
    fn change_active(&mut self, op: impl FnOnce(&mut ClientRegistry<WryEngine>) -> bool) {
        let Some(registry) = &mut self.registry else {
            return;
        };
        let before = registry.active_id();
        if op(registry) && registry.active_id() != before {
            tracing::debug!(client_id = registry.active_id().0, "Tab selected");
            self.show_active_tab();
            self.refresh_chrome();
        }
    }

    /// Show only the active tab's view, sized to the content area.
    pub(super) fn show_active_tab(&mut self) {
        let Some(content) = self.layout().map(|l| l.content) else {
            return;
        };
        let Some(registry) = &mut self.registry else {
            return;
        };
        let active = registry.active_id();
        for client in registry.iter_mut() {
            let is_active = client.id == active;
            let result = client
                .view
                .set_bounds(content)
                .and_then(|()| client.view.set_visible(is_active));
            if let Err(e) = result {
                tracing::warn!(client_id = client.id.0, error = %e, "Failed to update tab view");
            }
            if is_active {
                if let Err(e) = client.view.focus() {
                    tracing::debug!(client_id = client.id.0, error = %e, "Failed to focus tab");
                }
            }
        }
    }

    /// Re-lay out chrome and tabs after a resize.
    pub(super) fn sync_bounds(&mut self) {
        let Some(layout) = self.layout() else {
            return;
        };
        if let Some(chrome) = &self.chrome {
            chrome.set_bounds(layout.toolbar, layout.status);
        }
        if let Some(registry) = &mut self.registry {
            for client in registry.iter_mut() {
                if let Err(e) = client.view.set_bounds(layout.content) {
                    tracing::warn!(client_id = client.id.0, error = %e, "Failed to resize tab");
                }
            }
        }
    }

    pub(super) fn refresh_chrome(&mut self) {
        if let (Some(registry), Some(chrome)) = (&self.registry, &mut self.chrome) {
            self.sync.refresh(registry, chrome);
        }
    }

    /// Show an app message in the status bar.
    pub(super) fn notify(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::info!(status = %text, "Notice");
        if let Some(chrome) = &mut self.chrome {
            self.sync.notify(chrome, text);
        }
    }

    /// Run an engine command on the active tab. Failures are logged and
    /// otherwise ignored.
    fn with_active_view(
        &mut self,
        command: &'static str,
        f: impl FnOnce(&mut WryEngine) -> Result<(), EngineError>,
    ) {
        let Some(client) = self.registry.as_mut().and_then(|r| r.active_mut()) else {
            return;
        };
        if let Err(e) = f(&mut client.view) {
            tracing::warn!(client_id = client.id.0, command, error = %e, "Engine command failed");
        }
    }

    fn find(&mut self, request: FindRequest) {
        if request.query.is_empty() {
            if let Some(chrome) = &self.chrome {
                chrome.show_find_bar();
            }
            return;
        }
        let options = SearchOptions {
            case_sensitive: request.case_sensitive,
            forward: request.forward,
            wrap: request.wrap,
        };
        self.with_active_view("search_text", |view| {
            view.search_text(&request.query, options)
        });
        self.last_find = Some(request);
    }

    /// Repeat the last search in the given direction.
    fn find_again(&mut self, forward: bool) {
        match self.last_find.clone() {
            Some(request) => self.find(FindRequest { forward, ..request }),
            None => self.find(FindRequest::default()),
        }
    }

    fn toggle_inspector(&mut self) {
        let Some(client) = self.registry.as_mut().and_then(|r| r.active_mut()) else {
            return;
        };
        let open = !client.inspecting;
        match client.view.set_inspector(open) {
            Ok(()) => {
                client.inspecting = open;
                tracing::debug!(client_id = client.id.0, open, "Inspector toggled");
                if let Some(chrome) = &mut self.chrome {
                    chrome.set_inspecting(open);
                }
            }
            Err(e @ EngineError::Unsupported(_)) => self.notify(e.to_string()),
            Err(e) => {
                tracing::warn!(client_id = client.id.0, error = %e, "Inspector toggle failed");
            }
        }
    }

    /// Flip smooth scrolling for every open tab and for tabs opened later.
    fn toggle_smooth_scrolling(&mut self) {
        let enabled = !self.engine_settings.smooth_scrolling;
        self.engine_settings.smooth_scrolling = enabled;

        if let Some(registry) = &mut self.registry {
            for client in registry.iter_mut() {
                let mut settings = client.view.settings().clone();
                settings.smooth_scrolling = enabled;
                if let Err(e) = client.view.set_settings(settings) {
                    tracing::warn!(client_id = client.id.0, error = %e, "Failed to apply settings");
                }
            }
        }
        let state = if enabled { "on" } else { "off" };
        self.notify(format!("Smooth scrolling {state}"));
    }
}
