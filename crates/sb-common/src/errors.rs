use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("invalid keybind: {0}")]
    InvalidKeybind(String),

    #[error("window error: {0}")]
    Window(String),
}

/// Failures reported by the embedded web engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A new view (rendering surface) could not be instantiated.
    #[error("failed to create engine view: {0}")]
    Create(String),

    /// A command issued to an existing view failed.
    #[error("engine command failed: {0}")]
    Command(String),

    #[error("operation not supported by this engine: {0}")]
    Unsupported(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum SbError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
