//! Engine Adapter boundary for sb.
//!
//! Everything the browser core knows about the embedded web engine goes
//! through this crate:
//! - the [`Engine`] trait (queries and fire-and-forget commands on one view)
//! - the [`EngineFactory`] trait used by the tab registry to allocate views
//! - [`EngineEvent`] notifications pushed into a shared sink
//! - [`NavigationHistory`] for engines without a native history query
//! - the JSON IPC protocol shared by pages and chrome surfaces
//!
//! With the `webview` feature, [`webview`] provides the `wry` backend.

pub mod downloads;
pub mod engine;
pub mod events;
pub mod history;
pub mod ipc;
pub mod scripts;

#[cfg(feature = "webview")]
pub mod webview;

pub use engine::{Engine, EngineFactory, EngineSettings, SearchOptions};
pub use events::{EngineEvent, EventKind, EventSink, KeyPress, LoadStatus};
pub use history::NavigationHistory;
pub use ipc::{IpcMessage, IpcPayload};
