//! Core TOML config loading: read from path or platform default.

use crate::schema::SbConfig;
use crate::validation;
use sb_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. Validation failures are
/// logged here and left to the caller to act on.
pub fn load_from_path(path: &Path) -> Result<SbConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: SbConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/sb/config.toml`
/// On Linux: `~/.config/sb/config.toml`
///
/// If the file does not exist, writes a commented default and returns
/// the built-in defaults.
pub fn load_default() -> Result<SbConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(SbConfig::default());
    }

    load_from_path(&path)
}
