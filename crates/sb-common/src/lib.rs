pub mod actions;
pub mod errors;
pub mod types;

pub use actions::{Action, FindRequest};
pub use errors::{ConfigError, EngineError, PlatformError, SbError};
pub use types::{ClientId, EditCommand, Rect};

pub type Result<T> = std::result::Result<T, SbError>;
