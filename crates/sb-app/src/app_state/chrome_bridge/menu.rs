use serde::Serialize;

use sb_common::Action;
use sb_platform::KeybindRegistry;

/// One toolbar menu item as sent to the chrome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(in crate::app_state) struct MenuEntry {
    pub label: &'static str,
    /// Posted back verbatim as the payload of an `action` message.
    pub action: Action,
    /// Display form of the bound shortcut, if any.
    pub shortcut: Option<String>,
}

pub(in crate::app_state) fn menu_entries(keybinds: &KeybindRegistry) -> Vec<MenuEntry> {
    Action::menu_actions()
        .into_iter()
        .map(|action| MenuEntry {
            label: action.label(),
            shortcut: keybinds.keybind_for_action(&action),
            action,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sb_config::schema::KeybindConfig;

    #[test]
    fn one_entry_per_menu_action() {
        let keybinds = KeybindRegistry::from_config(&KeybindConfig::default());
        let entries = menu_entries(&keybinds);
        assert_eq!(entries.len(), Action::menu_actions().len());
        assert_eq!(entries[0].label, "New Tab");
    }

    #[test]
    fn bound_actions_show_shortcuts() {
        let keybinds = KeybindRegistry::from_config(&KeybindConfig::default());
        let entries = menu_entries(&keybinds);
        let quit = entries.iter().find(|e| e.action == Action::Quit).unwrap();
        assert!(quit.shortcut.as_deref().is_some_and(|s| s.contains('Q')));

        let about = entries.iter().find(|e| e.action == Action::About).unwrap();
        assert!(about.shortcut.is_none());
    }

    #[test]
    fn entries_serialize_actions_for_round_trip() {
        let keybinds = KeybindRegistry::from_config(&KeybindConfig::default());
        let json = serde_json::to_value(menu_entries(&keybinds)).unwrap();
        assert_eq!(json[0]["action"], "NewTab");
        assert_eq!(json[0]["label"], "New Tab");
    }
}
