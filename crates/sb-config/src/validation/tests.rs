use super::*;
use crate::schema::*;

#[test]
fn default_config_is_valid() {
    assert!(validate(&SbConfig::default()).is_ok());
}

#[test]
fn rejects_tiny_window() {
    let mut config = SbConfig::default();
    config.window.width = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
}

#[test]
fn rejects_zero_zoom_step() {
    let mut config = SbConfig::default();
    config.web.zoom_step = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("web.zoom_step"));
}

#[test]
fn rejects_nan_zoom_step() {
    let mut config = SbConfig::default();
    config.web.zoom_step = f64::NAN;
    assert!(validate(&config).is_err());
}

#[test]
fn rejects_empty_home_page() {
    let mut config = SbConfig::default();
    config.general.home_page = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("home_page"));
}

#[test]
fn rejects_blank_user_agent() {
    let mut config = SbConfig::default();
    config.web.user_agent = Some(String::new());
    assert!(validate(&config).is_err());
}

#[test]
fn rejects_label_width_out_of_range() {
    let mut config = SbConfig::default();
    config.tabs.label_max_chars = 500;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("tabs.label_max_chars"));
}

#[test]
fn rejects_chrome_taller_than_window() {
    let mut config = SbConfig::default();
    config.window.height = 200;
    config.window.toolbar_height = 190;
    config.window.status_bar_height = 20;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("no room for content"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = SbConfig::default();
    config.window.width = 10;
    config.tabs.label_max_chars = 1;
    config.keybinds.quit = "Cmd+T".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
    assert!(err.contains("tabs.label_max_chars"));
    assert!(err.contains("duplicate keybind"));
}
