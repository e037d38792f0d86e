//! Core types and constructors for ClientRegistry.

use sb_common::{ClientId, EngineError};
use sb_engine::{Engine, EngineFactory, EngineSettings};

use crate::client::Client;

/// Where a newly created tab lands with respect to focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The new tab becomes active.
    Foreground,
    /// The current tab stays active.
    Background,
}

impl Placement {
    pub fn from_background_flag(open_in_background: bool) -> Self {
        if open_in_background {
            Placement::Background
        } else {
            Placement::Foreground
        }
    }
}

/// Result of [`ClientRegistry::close_client`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The client was removed and its view released.
    Closed,
    /// The client is the only one left; nothing was removed.
    LastClient,
    NotFound,
}

/// Ordered set of open tabs with a single active pointer.
///
/// The active tab is tracked by id, so reordering never changes it.
pub struct ClientRegistry<E> {
    pub(super) clients: Vec<Client<E>>,
    pub(super) active: ClientId,
    pub(super) next_id: u32,
}

impl<E: Engine> ClientRegistry<E> {
    /// Create the registry with its first, active client.
    pub fn new<F>(factory: &mut F, settings: &EngineSettings) -> Result<Self, EngineError>
    where
        F: EngineFactory<View = E>,
    {
        let id = ClientId(1);
        let view = factory.create_view(id, settings)?;
        Ok(Self {
            clients: vec![Client::new(id, view)],
            active: id,
            next_id: 2,
        })
    }

    // -- Accessors --

    pub fn active_id(&self) -> ClientId {
        self.active
    }

    pub fn active(&self) -> Option<&Client<E>> {
        self.get(self.active)
    }

    pub fn active_mut(&mut self) -> Option<&mut Client<E>> {
        self.get_mut(self.active)
    }

    pub fn get(&self, id: ClientId) -> Option<&Client<E>> {
        self.clients.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: ClientId) -> Option<&mut Client<E>> {
        self.clients.iter_mut().find(|c| c.id == id)
    }

    /// Tab-strip position of `id`.
    pub fn position(&self, id: ClientId) -> Option<usize> {
        self.clients.iter().position(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Client<E>> {
        self.clients.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Client<E>> {
        self.clients.iter_mut()
    }

    /// Client ids in tab order.
    pub fn ids(&self) -> Vec<ClientId> {
        self.clients.iter().map(|c| c.id).collect()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Remove every client, releasing the views in tab order. Only used at
    /// shutdown; the registry is unusable afterwards.
    pub fn drain(&mut self) -> Vec<Client<E>> {
        std::mem::take(&mut self.clients)
    }
}
