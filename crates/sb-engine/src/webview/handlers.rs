use std::sync::{Arc, Mutex};

use sb_common::ClientId;
use tracing::{debug, info, warn};
use wry::WebViewBuilder;

use crate::downloads::destination_for;
use crate::events::{push_event, EventKind, EventSink, LoadStatus};
use crate::history::NavigationHistory;
use crate::ipc::{page_event_from_ipc, IpcMessage};

use super::types::SurfaceMessage;
use super::WebViewManager;

/// Progress reported as soon as a navigation starts.
pub(super) const STARTED_PROGRESS: u8 = 10;

// =============================================================================
// PAGE HANDLERS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_page_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        id: ClientId,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body();
            let Some(msg) = IpcMessage::from_json(body) else {
                warn!(client_id = id.0, body_len = body.len(), "page IPC rejected: invalid JSON");
                return;
            };
            match page_event_from_ipc(&msg) {
                Some(kind) => push_event(&events, id, kind),
                None => debug!(client_id = id.0, kind = %msg.kind, "page IPC ignored"),
            }
        })
    }

    /// Started commits the URI into the history before the app sees the
    /// event, so back/forward queries are current when it is drained.
    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        history: Arc<Mutex<NavigationHistory>>,
        id: ClientId,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| match event {
            wry::PageLoadEvent::Started => {
                debug!(client_id = id.0, url = %url, "load committed");
                if let Ok(mut h) = history.lock() {
                    h.commit(&url);
                }
                push_event(&events, id, EventKind::LoadStatus(LoadStatus::Committed { uri: url }));
                push_event(&events, id, EventKind::ProgressChanged(STARTED_PROGRESS));
            }
            wry::PageLoadEvent::Finished => {
                debug!(client_id = id.0, url = %url, "load finished");
                push_event(&events, id, EventKind::ProgressChanged(100));
                push_event(&events, id, EventKind::LoadStatus(LoadStatus::Finished));
            }
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        id: ClientId,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(client_id = id.0, title = %title, "title changed");
            push_event(&events, id, EventKind::TitleChanged(title));
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        id: ClientId,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if url.starts_with("javascript:") {
                warn!(client_id = id.0, "navigation to javascript: URL blocked");
                return false;
            }
            debug!(client_id = id.0, url = %url, "navigation requested");
            true
        })
    }

    /// Popups and `target="_blank"` links become new tabs instead of new
    /// windows.
    pub(super) fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        id: ClientId,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            info!(client_id = id.0, url = %url, "new view requested");
            push_event(&events, id, EventKind::CreateViewRequested { uri: url });
            false
        })
    }

    pub(super) fn attach_download_handlers<'a>(
        &self,
        builder: WebViewBuilder<'a>,
        id: ClientId,
    ) -> WebViewBuilder<'a> {
        let started_events = Arc::clone(&self.events);
        let finished_events = Arc::clone(&self.events);
        let dir = self.download_dir.clone();

        builder
            .with_download_started_handler(move |url, destination| {
                if let Err(e) = std::fs::create_dir_all(&dir) {
                    warn!(client_id = id.0, dir = %dir.display(), error = %e, "download directory unavailable");
                    return false;
                }
                *destination = destination_for(&dir, &url);
                info!(client_id = id.0, url = %url, path = %destination.display(), "download started");
                push_event(
                    &started_events,
                    id,
                    EventKind::DownloadRequested {
                        uri: url,
                        destination: destination.clone(),
                    },
                );
                true
            })
            .with_download_completed_handler(move |url, path, success| {
                info!(client_id = id.0, url = %url, success, "download finished");
                push_event(
                    &finished_events,
                    id,
                    EventKind::DownloadFinished {
                        uri: url,
                        path,
                        success,
                    },
                );
            })
    }
}

// =============================================================================
// SURFACE HANDLERS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_surface_ipc_handler<'a>(
        &self,
        builder: WebViewBuilder<'a>,
        surface: &'static str,
    ) -> WebViewBuilder<'a> {
        let queue = Arc::clone(&self.surface_messages);
        builder.with_ipc_handler(move |request| {
            let body = request.body();
            let Some(message) = IpcMessage::from_json(body) else {
                warn!(surface, body_len = body.len(), "chrome IPC rejected: invalid JSON");
                return;
            };
            debug!(surface, kind = %message.kind, "chrome IPC");
            if let Ok(mut q) = queue.lock() {
                q.push(SurfaceMessage { surface, message });
            }
        })
    }
}
