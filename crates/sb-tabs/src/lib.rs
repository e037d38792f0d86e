//! Tab/Client Registry and Title/Status Synchronizer.
//!
//! The registry owns one [`Client`] per open tab, each holding an engine
//! view, and keeps a single active tab. The synchronizer turns engine
//! notifications into tab state and [`Chrome`] updates.

pub mod chrome;
pub mod client;
pub mod registry;
pub mod sync;

#[cfg(test)]
pub(crate) mod testing;

pub use chrome::{Chrome, NavigationState, TabEntry};
pub use client::Client;
pub use registry::{ClientRegistry, CloseOutcome, Placement};
pub use sync::{StatusContext, StatusStack, SyncRequest, Synchronizer};
