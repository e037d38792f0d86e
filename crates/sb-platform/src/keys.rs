//! Key name normalization for key events.
//!
//! Page and chrome key presses arrive as DOM `KeyboardEvent.key` values and
//! window key presses as winit logical keys. Both use the same names
//! (`"ArrowLeft"`, `" "`, `"t"`), so one function maps them onto the names
//! produced by [`parse_keybind`](crate::keymap::parse_keybind).

use crate::keymap::normalize_key_name;

/// Convert an event key name to the normalized string used by `KeyCombo`.
pub fn normalize_event_key(key: &str) -> String {
    match key {
        "ArrowUp" => "Up".into(),
        "ArrowDown" => "Down".into(),
        "ArrowLeft" => "Left".into(),
        "ArrowRight" => "Right".into(),
        " " => "Space".into(),
        "." | "," | "/" | "\\" | ";" | "'" | "[" | "]" | "-" | "=" | "`" | "+" => key.into(),
        _ => normalize_key_name(key),
    }
}
