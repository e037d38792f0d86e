use sb_common::ClientId;
use sb_engine::Engine;

/// One open tab: an engine view plus what the chrome shows for it.
pub struct Client<E> {
    pub id: ClientId,
    pub view: E,
    /// Last reported load progress, 0-100.
    pub progress: u8,
    /// Set by a finished load and cleared by the next commit. Late
    /// partial progress for a finished page is dropped while set.
    pub finished: bool,
    pub title: String,
    /// Last committed URI.
    pub uri: String,
    pub label: String,
    pub inspecting: bool,
}

impl<E: Engine> Client<E> {
    pub(crate) fn new(id: ClientId, view: E) -> Self {
        Self {
            id,
            view,
            progress: 0,
            finished: false,
            title: String::new(),
            uri: String::new(),
            label: String::new(),
            inspecting: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.progress < 100
    }

    /// Current zoom level of the view.
    pub fn zoom(&self) -> f64 {
        self.view.zoom_level()
    }
}
