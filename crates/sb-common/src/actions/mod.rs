use serde::{Deserialize, Serialize};

mod action_enum;
mod dispatch;

pub use action_enum::*;

/// Parameters of a find-in-page request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FindRequest {
    pub query: String,
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default = "default_true")]
    pub forward: bool,
    #[serde(default = "default_true")]
    pub wrap: bool,
}

fn default_true() -> bool {
    true
}

impl FindRequest {
    /// Forward, wrapping, case-insensitive search.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            case_sensitive: false,
            forward: true,
            wrap: true,
        }
    }
}

/// An empty query opens the find bar without searching.
impl Default for FindRequest {
    fn default() -> Self {
        Self::new("")
    }
}
