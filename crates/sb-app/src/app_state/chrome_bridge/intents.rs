//! Validation and decoding of IPC messages from the chrome surfaces.

use sb_common::{Action, FindRequest};
use sb_engine::{IpcMessage, KeyPress};

/// Allowed IPC message kinds from the chrome.
///
/// Any message with a `kind` not in this list is rejected and logged.
const ALLOWED_CHROME_KINDS: &[&str] = &["ready", "action", "navigate", "find", "key"];

pub fn is_chrome_kind_allowed(kind: &str) -> bool {
    ALLOWED_CHROME_KINDS.contains(&kind)
}

/// What a chrome message asks the app to do.
#[derive(Debug, Clone, PartialEq)]
pub(in crate::app_state) enum ChromeIntent {
    /// The surface finished loading and wants its initial state.
    Ready,
    Action(Action),
    /// A key press inside the chrome that may be a shortcut.
    Key(KeyPress),
}

/// Decode a chrome message. Unknown kinds and malformed payloads yield
/// `None`.
pub(in crate::app_state) fn intent_from_ipc(msg: &IpcMessage) -> Option<ChromeIntent> {
    if !is_chrome_kind_allowed(&msg.kind) {
        return None;
    }
    match msg.kind.as_str() {
        "ready" => Some(ChromeIntent::Ready),
        "action" => msg.json_payload::<Action>().map(ChromeIntent::Action),
        "navigate" => msg
            .text_payload()
            .map(|uri| ChromeIntent::Action(Action::Navigate(uri.to_string()))),
        "find" => msg
            .json_payload::<FindRequest>()
            .or_else(|| msg.text_payload().map(FindRequest::new))
            .map(|req| ChromeIntent::Action(Action::Find(req))),
        "key" => msg.json_payload::<KeyPress>().map(ChromeIntent::Key),
        _ => None,
    }
}
