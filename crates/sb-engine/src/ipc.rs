//! IPC protocol between Rust and JavaScript.
//!
//! - **JS -> Rust**: `window.ipc.postMessage(JSON.stringify({kind, payload}))`
//!   reaches the `ipc_handler` registered on the view.
//! - **Rust -> JS**: `evaluate_script` of a [`js_dispatch_message`] snippet
//!   calls the handler registered with `window.sb.ipc.on(kind, fn)`.
//!
//! Pages and chrome surfaces share this protocol. Pages additionally get
//! [`PAGE_HOOKS_SCRIPT`], which reports link hover, early progress and
//! shortcut key presses.

use serde::{Deserialize, Serialize};

use crate::events::{EventKind, KeyPress};

/// Progress reported when the page's DOM is ready but subresources may
/// still be loading.
pub const DOM_READY_PROGRESS: u8 = 70;

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    pub kind: String,
    #[serde(default)]
    pub payload: IpcPayload,
}

/// Payload of an IPC message: a plain string, structured JSON or nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    #[default]
    None,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn text(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Text(text.into()),
        }
    }

    pub fn json(kind: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Json(value),
        }
    }

    /// The payload as a string, if it is one.
    pub fn text_payload(&self) -> Option<&str> {
        match &self.payload {
            IpcPayload::Text(s) => Some(s),
            IpcPayload::Json(serde_json::Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Deserialize a structured payload into `T`.
    pub fn json_payload<T: serde::de::DeserializeOwned>(&self) -> Option<T> {
        match &self.payload {
            IpcPayload::Json(v) => serde_json::from_value(v.clone()).ok(),
            IpcPayload::Text(s) => serde_json::from_value(serde_json::Value::String(s.clone())).ok(),
            IpcPayload::None => serde_json::from_value(serde_json::Value::Null).ok(),
        }
    }
}

/// Decode a message posted by [`PAGE_HOOKS_SCRIPT`] into a notification.
///
/// Unknown kinds and malformed payloads yield `None`.
pub fn page_event_from_ipc(msg: &IpcMessage) -> Option<EventKind> {
    match msg.kind.as_str() {
        "link_hover" => {
            let link = msg.text_payload().filter(|s| !s.is_empty()).map(String::from);
            Some(EventKind::HoveringOverLink(link))
        }
        "dom_ready" => Some(EventKind::ProgressChanged(DOM_READY_PROGRESS)),
        "key" => msg.json_payload::<KeyPress>().map(EventKind::KeyPressed),
        _ => None,
    }
}

/// JavaScript that sets up the IPC bridge on the JS side.
/// Injected into every view, pages and chrome alike.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.sb = window.sb || {};
    window.sb.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Page-side hooks: link hover, DOM-ready progress and forwarding of
/// modified key presses (plus F-keys) so browser shortcuts keep working
/// while a page has focus.
pub const PAGE_HOOKS_SCRIPT: &str = r#"
(function() {
    if (window.top !== window) { return; }
    var send = function(kind, payload) { window.sb.ipc.send(kind, payload); };
    var hovered = null;

    document.addEventListener('mouseover', function(e) {
        var a = e.target && e.target.closest ? e.target.closest('a[href]') : null;
        if (a && a.href !== hovered) {
            hovered = a.href;
            send('link_hover', hovered);
        }
    }, true);
    document.addEventListener('mouseout', function(e) {
        var a = e.target && e.target.closest ? e.target.closest('a[href]') : null;
        var to = e.relatedTarget && e.relatedTarget.closest ? e.relatedTarget.closest('a[href]') : null;
        if (a && hovered !== null && to !== a) {
            hovered = null;
            send('link_hover', null);
        }
    }, true);

    document.addEventListener('DOMContentLoaded', function() {
        send('dom_ready', null);
    });

    window.addEventListener('keydown', function(e) {
        var fkey = /^F[0-9]+$/.test(e.key);
        if (!(e.ctrlKey || e.altKey || e.metaKey || fkey)) { return; }
        if (['Control', 'Alt', 'Shift', 'Meta'].indexOf(e.key) >= 0) { return; }
        send('key', {
            key: e.key,
            ctrl: e.ctrlKey,
            alt: e.altKey,
            shift: e.shiftKey,
            meta: e.metaKey
        });
    }, true);
})();
"#;

/// JS snippet that dispatches a message to the JS-side IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.sb && window.sb.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}
