//! Full configuration validation.
//!
//! Validates numeric ranges, the home page, and keybind uniqueness, and
//! collects every problem into a single `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::keybinds;
use crate::schema::SbConfig;
use helpers::{validate_range, validate_range_f64};
use sb_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SbConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_no_duplicates(&config.keybinds) {
        errors.push(e.to_string());
    }

    validate_general(&mut errors, config);
    validate_web(&mut errors, config);
    validate_tabs(&mut errors, config);
    validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_general(errors: &mut Vec<String>, config: &SbConfig) {
    if config.general.home_page.trim().is_empty() {
        errors.push("general.home_page must not be empty".into());
    }
}

fn validate_web(errors: &mut Vec<String>, config: &SbConfig) {
    validate_range_f64(errors, "web.zoom_step", config.web.zoom_step, 0.01, 1.0);
    if let Some(ua) = &config.web.user_agent {
        if ua.trim().is_empty() {
            errors.push("web.user_agent must not be empty when set".into());
        }
    }
}

fn validate_tabs(errors: &mut Vec<String>, config: &SbConfig) {
    validate_range(errors, "tabs.label_max_chars", config.tabs.label_max_chars, 4, 128);
}

fn validate_window(errors: &mut Vec<String>, config: &SbConfig) {
    let w = &config.window;
    validate_range(errors, "window.width", w.width, 200, 16384);
    validate_range(errors, "window.height", w.height, 150, 16384);
    validate_range(errors, "window.toolbar_height", w.toolbar_height, 32, 200);
    validate_range(errors, "window.status_bar_height", w.status_bar_height, 0, 64);
    if w.toolbar_height + w.status_bar_height >= w.height {
        errors.push(format!(
            "window.height = {} leaves no room for content below a {}px toolbar and {}px status bar",
            w.height, w.toolbar_height, w.status_bar_height
        ));
    }
}
