//! Active-tab handling for ClientRegistry.

use sb_common::ClientId;
use sb_engine::Engine;

use super::ClientRegistry;

impl<E: Engine> ClientRegistry<E> {
    /// Make `id` the active tab. Returns `false` for unknown ids.
    pub fn set_active(&mut self, id: ClientId) -> bool {
        if self.position(id).is_some() {
            self.active = id;
            true
        } else {
            false
        }
    }

    /// Activate the tab at `index`. Out-of-range indexes select the last tab.
    pub fn set_active_index(&mut self, index: usize) -> bool {
        match self.clients.get(index).or_else(|| self.clients.last()) {
            Some(client) => {
                self.active = client.id;
                true
            }
            None => false,
        }
    }

    /// Activate the next tab, wrapping around.
    pub fn activate_next(&mut self) -> bool {
        self.step_active(1)
    }

    /// Activate the previous tab, wrapping around.
    pub fn activate_prev(&mut self) -> bool {
        self.step_active(self.clients.len().saturating_sub(1))
    }

    fn step_active(&mut self, offset: usize) -> bool {
        let len = self.clients.len();
        if len <= 1 {
            return false;
        }
        let Some(current) = self.position(self.active) else {
            return false;
        };
        self.active = self.clients[(current + offset) % len].id;
        true
    }
}
