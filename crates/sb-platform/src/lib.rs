pub mod input;
pub mod keymap;
pub mod keys;
pub mod paths;

pub use input::{KeyCombo, KeybindRegistry};
pub use keymap::{KeyBind, Modifier};
pub use keys::normalize_event_key;
pub use paths::download_dir;
