//! Engine notifications.
//!
//! Backends push events from their callbacks into an [`EventSink`]; the app
//! drains it once per event-loop turn.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use sb_common::ClientId;
use serde::{Deserialize, Serialize};

/// Shared queue of pending notifications.
pub type EventSink = Arc<Mutex<Vec<EngineEvent>>>;

/// Push one event into the sink. A poisoned lock drops the event.
pub fn push_event(sink: &EventSink, client: ClientId, kind: EventKind) {
    if let Ok(mut events) = sink.lock() {
        events.push(EngineEvent { client, kind });
    }
}

/// Take every pending event out of the sink.
pub fn drain_events(sink: &EventSink) -> Vec<EngineEvent> {
    match sink.lock() {
        Ok(mut events) => std::mem::take(&mut *events),
        Err(_) => Vec::new(),
    }
}

/// A notification from the view owned by `client`.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineEvent {
    pub client: ClientId,
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    TitleChanged(String),
    /// Load progress, 0-100.
    ProgressChanged(u8),
    LoadStatus(LoadStatus),
    /// Pointer entered (`Some`) or left (`None`) a link.
    HoveringOverLink(Option<String>),
    DownloadRequested {
        uri: String,
        destination: PathBuf,
    },
    DownloadFinished {
        uri: String,
        path: Option<PathBuf>,
        success: bool,
    },
    /// The page asked for a new browsing context (`target="_blank"`,
    /// `window.open`).
    CreateViewRequested {
        uri: String,
    },
    /// A shortcut pressed while the page had focus.
    KeyPressed(KeyPress),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// A navigation to `uri` was committed.
    Committed { uri: String },
    Finished,
}

/// A key press forwarded from page or chrome content, using DOM
/// `KeyboardEvent` naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPress {
    pub key: String,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub meta: bool,
}
