//! `wry` backend.
//!
//! `WebViewManager` builds child webviews inside the app window: one
//! [`WryEngine`] per tab and plain HTML [`SurfaceHandle`]s for the browser
//! chrome. Page callbacks push [`EngineEvent`]s into the shared sink and
//! chrome IPC lands in a separate queue; both are drained by the app.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::events::{self, EngineEvent, EventSink};

mod bounds;
mod engine_view;
mod factory;
mod handlers;
mod lifecycle;
mod surface;
mod types;

pub use bounds::rect_to_wry;
pub use engine_view::WryEngine;
pub use factory::WryFactory;
pub use surface::SurfaceHandle;
pub use types::{SurfaceConfig, SurfaceMessage};

pub struct WebViewManager {
    pub(crate) events: EventSink,
    pub(crate) surface_messages: Arc<Mutex<Vec<SurfaceMessage>>>,
    /// Directory downloads are saved into.
    pub(crate) download_dir: PathBuf,
}

impl WebViewManager {
    pub fn new(download_dir: PathBuf) -> Self {
        Self {
            events: Arc::default(),
            surface_messages: Arc::default(),
            download_dir,
        }
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Drain all pending page notifications.
    pub fn drain_events(&self) -> Vec<EngineEvent> {
        events::drain_events(&self.events)
    }

    /// Drain all pending chrome IPC messages.
    pub fn drain_surface_messages(&self) -> Vec<SurfaceMessage> {
        match self.surface_messages.lock() {
            Ok(mut msgs) => std::mem::take(&mut *msgs),
            Err(_) => Vec::new(),
        }
    }
}
