//! Keybind validation utilities.

use crate::schema::KeybindConfig;
use sb_common::ConfigError;
use std::collections::HashMap;

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![
        ("new_tab", &config.new_tab),
        ("close_tab", &config.close_tab),
        ("next_tab", &config.next_tab),
        ("prev_tab", &config.prev_tab),
        ("focus_address", &config.focus_address),
        ("reload", &config.reload),
        ("back", &config.back),
        ("forward", &config.forward),
        ("home", &config.home),
        ("find", &config.find),
        ("find_next", &config.find_next),
        ("find_prev", &config.find_prev),
        ("zoom_in", &config.zoom_in),
        ("zoom_out", &config.zoom_out),
        ("zoom_reset", &config.zoom_reset),
        ("inspector", &config.inspector),
        ("fullscreen", &config.fullscreen),
        ("quit", &config.quit),
    ]
}

/// Validate that no two keybinds are mapped to the same key combination.
///
/// Empty bindings are treated as "unbound" and skipped.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let mut seen: HashMap<&str, &str> = HashMap::new();

    for (name, binding) in all_keybinds(config) {
        if binding.is_empty() {
            continue;
        }
        if let Some(existing_name) = seen.get(binding) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(binding, name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keybinds_have_no_duplicates() {
        let config = KeybindConfig::default();
        assert!(validate_no_duplicates(&config).is_ok());
    }

    #[test]
    fn all_keybinds_returns_18_entries() {
        let config = KeybindConfig::default();
        assert_eq!(all_keybinds(&config).len(), 18);
    }

    #[test]
    fn detects_duplicate_keybinds() {
        let config = KeybindConfig {
            reload: "Cmd+L".into(),
            ..Default::default()
        };
        let err = validate_no_duplicates(&config).unwrap_err().to_string();
        assert!(err.contains("duplicate keybind"));
        assert!(err.contains("Cmd+L"));
        assert!(err.contains("focus_address"));
        assert!(err.contains("reload"));
    }

    #[test]
    fn empty_bindings_are_not_duplicates() {
        let config = KeybindConfig {
            home: String::new(),
            fullscreen: String::new(),
            ..Default::default()
        };
        assert!(validate_no_duplicates(&config).is_ok());
    }

    #[test]
    fn names_match_config_fields() {
        let config = KeybindConfig::default();
        let names: Vec<&str> = all_keybinds(&config).iter().map(|(n, _)| *n).collect();
        assert!(names.contains(&"new_tab"));
        assert!(names.contains(&"inspector"));
        assert!(names.contains(&"quit"));
    }
}
