//! Create, close and reorder operations on the ClientRegistry.

use sb_common::{ClientId, EngineError};
use sb_engine::{Engine, EngineFactory, EngineSettings};
use tracing::{debug, info};

use crate::client::Client;

use super::{ClientRegistry, CloseOutcome, Placement};

impl<E: Engine> ClientRegistry<E> {
    /// Open a new tab in last position.
    ///
    /// On factory failure the registry is left unchanged and the id is not
    /// consumed.
    pub fn create_client<F>(
        &mut self,
        factory: &mut F,
        settings: &EngineSettings,
        placement: Placement,
    ) -> Result<ClientId, EngineError>
    where
        F: EngineFactory<View = E>,
    {
        let id = ClientId(self.next_id);
        let view = factory.create_view(id, settings)?;
        self.next_id += 1;

        self.clients.push(Client::new(id, view));
        if placement == Placement::Foreground {
            self.active = id;
        }
        info!(client_id = id.0, ?placement, tabs = self.clients.len(), "tab opened");
        Ok(id)
    }

    /// Close the tab `id` and release its view.
    ///
    /// Closing the active tab activates the tab that slides into its
    /// position, or the new last tab when it was last.
    pub fn close_client(&mut self, id: ClientId) -> CloseOutcome {
        let Some(idx) = self.position(id) else {
            return CloseOutcome::NotFound;
        };
        if self.clients.len() <= 1 {
            return CloseOutcome::LastClient;
        }

        let closed = self.clients.remove(idx);
        if closed.id == self.active {
            let next = idx.min(self.clients.len() - 1);
            self.active = self.clients[next].id;
        }
        drop(closed);

        info!(client_id = id.0, tabs = self.clients.len(), "tab closed");
        CloseOutcome::Closed
    }

    /// Move tab `id` to `index` (clamped to the last position).
    pub fn move_client(&mut self, id: ClientId, index: usize) -> bool {
        let Some(from) = self.position(id) else {
            return false;
        };
        let to = index.min(self.clients.len() - 1);
        if from != to {
            let client = self.clients.remove(from);
            self.clients.insert(to, client);
            debug!(client_id = id.0, from, to, "tab moved");
        }
        true
    }
}
