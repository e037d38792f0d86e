//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use sb_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_sb_config.toml"));
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[general]
home_page = "https://example.com/"

[web]
zoom_step = 0.25
smooth_scrolling = true
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.general.home_page, "https://example.com/");
    assert!((config.web.zoom_step - 0.25).abs() < f64::EPSILON);
    assert!(config.web.smooth_scrolling);
    // Defaults preserved
    assert!(config.web.enable_scripts);
    assert_eq!(config.window.height, 600);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_with_invalid_values_still_returns_parsed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[tabs]\nlabel_max_chars = 1\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.tabs.label_max_chars, 1);
}

#[test]
fn create_default_config_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sub").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[general]"));
    assert!(content.contains("[keybinds]"));
}

#[test]
fn default_template_parses_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    create_default_config(&path).unwrap();

    let config = load_from_path(&path).unwrap();
    let defaults = crate::SbConfig::default();
    assert_eq!(config.general.home_page, defaults.general.home_page);
    assert_eq!(config.window.width, defaults.window.width);
    assert_eq!(config.keybinds.quit, defaults.keybinds.quit);
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_ends_with_sb_config() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("sb/config.toml"));
    }
}
