use std::collections::HashMap;

use sb_common::Action;
use sb_config::schema::KeybindConfig;

use crate::keymap::{keybind_to_display, parse_keybind};

use super::key_combo::KeyCombo;

/// Number-row tab shortcuts: `Cmd+1`..`Cmd+8` pick a position, `Cmd+9`
/// picks the last tab.
const TAB_INDEX_KEYS: [&str; 9] = ["1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Maps key combinations to [`Action`]s.
pub struct KeybindRegistry {
    bindings: HashMap<KeyCombo, Action>,
}

impl KeybindRegistry {
    /// Build the registry from the `[keybinds]` config section.
    ///
    /// Invalid or empty binding strings are logged and skipped.
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mut bindings = HashMap::new();

        let mappings: Vec<(&str, Action)> = vec![
            (&config.new_tab, Action::NewTab),
            (&config.close_tab, Action::CloseActiveTab),
            (&config.next_tab, Action::NextTab),
            (&config.prev_tab, Action::PrevTab),
            (&config.focus_address, Action::FocusAddressBar),
            (&config.reload, Action::Reload),
            (&config.back, Action::GoBack),
            (&config.forward, Action::GoForward),
            (&config.home, Action::GoHome),
            (&config.find, Action::Find(Default::default())),
            (&config.find_next, Action::FindNext),
            (&config.find_prev, Action::FindPrev),
            (&config.zoom_in, Action::ZoomIn),
            (&config.zoom_out, Action::ZoomOut),
            (&config.zoom_reset, Action::ZoomReset),
            (&config.inspector, Action::ToggleInspector),
            (&config.fullscreen, Action::ToggleFullscreen),
            (&config.quit, Action::Quit),
        ];

        for (binding_str, action) in mappings {
            if binding_str.is_empty() {
                continue;
            }
            match parse_keybind(binding_str) {
                Ok(kb) => {
                    bindings.insert(KeyCombo::from_keybind(&kb), action);
                }
                Err(e) => {
                    tracing::warn!("invalid keybind '{binding_str}': {e}");
                }
            }
        }

        for (index, key) in TAB_INDEX_KEYS.iter().enumerate() {
            if let Ok(kb) = parse_keybind(&format!("Cmd+{key}")) {
                bindings
                    .entry(KeyCombo::from_keybind(&kb))
                    .or_insert(Action::SelectTabIndex(index));
            }
        }

        Self { bindings }
    }

    pub fn lookup(&self, combo: &KeyCombo) -> Option<&Action> {
        self.bindings.get(combo)
    }

    /// Display string of the first binding found for `action`.
    pub fn keybind_for_action(&self, action: &Action) -> Option<String> {
        self.bindings
            .iter()
            .find(|(_, a)| *a == action)
            .map(|(combo, _)| keybind_to_display(&combo.to_keybind()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
