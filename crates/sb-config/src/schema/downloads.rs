use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadsConfig {
    /// Target directory. `None` uses the platform download directory.
    pub directory: Option<PathBuf>,
}
