//! Keybind registry: maps parsed key combinations to runtime `Action`s.
//!
//! Built from [`KeybindConfig`](sb_config::schema::KeybindConfig) at startup.

mod key_combo;
mod registry;

pub use key_combo::KeyCombo;
pub use registry::KeybindRegistry;
