//! Platform directories for sb.

use std::path::PathBuf;

use sb_common::PlatformError;

/// Where downloads land: the configured directory when set, else the
/// platform download directory, else the home directory.
pub fn download_dir(configured: Option<&PathBuf>) -> Result<PathBuf, PlatformError> {
    if let Some(dir) = configured {
        return Ok(dir.clone());
    }
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| PlatformError::PathError("could not determine download directory".into()))
}
