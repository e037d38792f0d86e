//! The ClientRegistry: ordered tabs, each owning one engine view.

mod focus;
mod operations;
mod types;

pub use types::*;
