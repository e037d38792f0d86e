//! Keyboard shortcuts configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts configuration.
///
/// Format: "Modifier+Key" where Modifier is one of: Cmd, Ctrl, Alt, Option,
/// Shift, Super. `Cmd` means Command on macOS and Control elsewhere.
/// Multiple modifiers: "Cmd+Shift+I".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub new_tab: String,
    pub close_tab: String,
    pub next_tab: String,
    pub prev_tab: String,
    pub focus_address: String,
    pub reload: String,
    pub back: String,
    pub forward: String,
    pub home: String,
    pub find: String,
    pub find_next: String,
    pub find_prev: String,
    pub zoom_in: String,
    pub zoom_out: String,
    pub zoom_reset: String,
    pub inspector: String,
    pub fullscreen: String,
    pub quit: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            new_tab: "Cmd+T".into(),
            close_tab: "Cmd+W".into(),
            next_tab: "Ctrl+Tab".into(),
            prev_tab: "Ctrl+Shift+Tab".into(),
            focus_address: "Cmd+L".into(),
            reload: "Cmd+R".into(),
            back: "Alt+Left".into(),
            forward: "Alt+Right".into(),
            home: "Alt+Home".into(),
            find: "Cmd+F".into(),
            find_next: "Cmd+G".into(),
            find_prev: "Cmd+Shift+G".into(),
            zoom_in: "Cmd+Equal".into(),
            zoom_out: "Cmd+Minus".into(),
            zoom_reset: "Cmd+0".into(),
            inspector: "Cmd+Shift+I".into(),
            fullscreen: "F11".into(),
            quit: "Cmd+Q".into(),
        }
    }
}
