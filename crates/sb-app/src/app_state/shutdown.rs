//! Graceful shutdown: release tab views, then the chrome.

use super::core::SbApp;

impl SbApp {
    /// Release every webview before the window goes away.
    ///
    /// Tab views are dropped first, in tab order, then the chrome surfaces.
    pub(super) fn shutdown(&mut self) {
        if self.registry.is_none() && self.chrome.is_none() {
            return;
        }
        tracing::info!("Initiating graceful shutdown");

        if let Some(mut registry) = self.registry.take() {
            let clients = registry.drain();
            tracing::debug!(tabs = clients.len(), "Closing tabs");
            drop(clients);
        }
        self.chrome = None;

        tracing::info!("Graceful shutdown complete");
    }
}
