//! Title/Status Synchronizer: applies engine notifications to tab state
//! and pushes the result to the chrome.

mod label;
mod status;
mod title;

#[cfg(test)]
mod tests;

pub use label::tab_label;
pub use status::{StatusContext, StatusStack};
pub use title::{window_title, APP_NAME};

use std::path::Path;

use sb_common::ClientId;
use sb_engine::downloads::file_name_from_uri;
use sb_engine::{Engine, EngineEvent, EventKind, KeyPress, LoadStatus};
use tracing::{debug, trace};

use crate::chrome::{Chrome, NavigationState, TabEntry};
use crate::client::Client;
use crate::registry::ClientRegistry;

/// Follow-up work a notification asks of the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncRequest {
    /// Open `uri` in a new tab.
    OpenTab { uri: String },
    /// Run the shortcut bound to this key press.
    Shortcut(KeyPress),
}

pub struct Synchronizer {
    status: StatusStack,
    label_max_chars: usize,
}

impl Synchronizer {
    pub fn new(label_max_chars: usize) -> Self {
        Self {
            status: StatusStack::new(),
            label_max_chars,
        }
    }

    pub fn status(&self) -> &StatusStack {
        &self.status
    }

    /// Apply one notification.
    pub fn apply<E: Engine, C: Chrome>(
        &mut self,
        registry: &mut ClientRegistry<E>,
        chrome: &mut C,
        event: EngineEvent,
    ) -> Option<SyncRequest> {
        let id = event.client;
        let is_active = registry.active_id() == id;

        match event.kind {
            EventKind::TitleChanged(title) => {
                let client = registry.get_mut(id)?;
                client.title = title;
                self.relabel(client);
                if is_active {
                    chrome.set_title(&window_title(&client.title, client.progress));
                }
                chrome.set_tabs(&tab_entries(registry));
            }
            EventKind::ProgressChanged(progress) => {
                let client = registry.get_mut(id)?;
                if client.finished && progress < 100 {
                    trace!(client_id = id.0, progress, "stale progress after finish");
                    return None;
                }
                self.set_progress(registry, chrome, id, is_active, progress);
            }
            EventKind::LoadStatus(LoadStatus::Committed { uri }) => {
                let client = registry.get_mut(id)?;
                client.uri = uri;
                client.finished = false;
                self.relabel(client);
                if is_active {
                    chrome.set_address(&client.uri);
                    chrome.set_navigation_state(navigation_state(client));
                    // The pointer left whatever link it was on.
                    self.status.clear(StatusContext::LinkHover);
                    chrome.set_status(self.status.top());
                }
                chrome.set_tabs(&tab_entries(registry));
            }
            EventKind::LoadStatus(LoadStatus::Finished) => {
                registry.get_mut(id)?.finished = true;
                self.set_progress(registry, chrome, id, is_active, 100);
                let client = registry.get(id)?;
                if is_active {
                    chrome.set_navigation_state(navigation_state(client));
                }
            }
            EventKind::HoveringOverLink(link) => {
                match link {
                    Some(link) => self.status.push(StatusContext::LinkHover, link),
                    None => {
                        self.status.pop(StatusContext::LinkHover);
                    }
                }
                chrome.set_status(self.status.top());
            }
            EventKind::DownloadRequested { uri, destination } => {
                let name = display_name(Some(&destination), &uri);
                self.status
                    .push(StatusContext::Download, format!("Downloading {name}"));
                chrome.set_status(self.status.top());
            }
            EventKind::DownloadFinished { uri, path, success } => {
                self.status.pop(StatusContext::Download);
                if !success {
                    let name = display_name(path.as_deref(), &uri);
                    self.status
                        .replace(StatusContext::Notice, format!("Download failed: {name}"));
                }
                chrome.set_status(self.status.top());
            }
            EventKind::CreateViewRequested { uri } => {
                debug!(client_id = id.0, url = %uri, "new tab requested by page");
                return Some(SyncRequest::OpenTab { uri });
            }
            EventKind::KeyPressed(key) => return Some(SyncRequest::Shortcut(key)),
        }
        None
    }

    /// Full resync after the active tab changed or tabs were added,
    /// removed or reordered.
    pub fn refresh<E: Engine, C: Chrome>(&self, registry: &ClientRegistry<E>, chrome: &mut C) {
        if let Some(client) = registry.active() {
            chrome.set_title(&window_title(&client.title, client.progress));
            chrome.set_address(&client.uri);
            chrome.set_navigation_state(navigation_state(client));
            chrome.set_inspecting(client.inspecting);
        }
        chrome.set_tabs(&tab_entries(registry));
        chrome.set_status(self.status.top());
    }

    /// Show an app message (errors, about text) in the status bar,
    /// replacing the previous one.
    pub fn notify<C: Chrome>(&mut self, chrome: &mut C, text: impl Into<String>) {
        self.status.replace(StatusContext::Notice, text);
        chrome.set_status(self.status.top());
    }

    fn set_progress<E: Engine, C: Chrome>(
        &self,
        registry: &mut ClientRegistry<E>,
        chrome: &mut C,
        id: ClientId,
        is_active: bool,
        progress: u8,
    ) {
        let Some(client) = registry.get_mut(id) else {
            return;
        };
        let was_loading = client.is_loading();
        client.progress = progress.min(100);
        trace!(client_id = id.0, progress = client.progress, "progress");
        if is_active {
            chrome.set_title(&window_title(&client.title, client.progress));
        }
        if was_loading != client.is_loading() {
            chrome.set_tabs(&tab_entries(registry));
        }
    }

    fn relabel<E>(&self, client: &mut Client<E>) {
        client.label = tab_label(&client.title, &client.uri, self.label_max_chars);
    }
}

fn navigation_state<E: Engine>(client: &Client<E>) -> NavigationState {
    NavigationState {
        can_go_back: client.view.can_go_back(),
        can_go_forward: client.view.can_go_forward(),
    }
}

/// Tab strip contents in tab order.
pub fn tab_entries<E: Engine>(registry: &ClientRegistry<E>) -> Vec<TabEntry> {
    let active = registry.active_id();
    registry
        .iter()
        .map(|c| TabEntry {
            id: c.id,
            label: if c.label.is_empty() {
                tab_label(&c.title, &c.uri, usize::MAX)
            } else {
                c.label.clone()
            },
            active: c.id == active,
            loading: c.is_loading(),
        })
        .collect()
}

fn display_name(path: Option<&Path>, uri: &str) -> String {
    path.and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name_from_uri(uri))
}
