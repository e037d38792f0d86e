use serde::{Deserialize, Serialize};

use crate::types::EditCommand;

use super::FindRequest;

/// Every user-triggerable action in the browser.
///
/// Key bindings, chrome buttons and the address bar all resolve to an
/// `Action`. The app dispatcher matches on this enum to route it to the
/// tab registry or to the active tab's engine view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Tabs --
    NewTab,
    CloseActiveTab,
    CloseTab(u32),
    SelectTab(u32),
    SelectTabIndex(usize),
    NextTab,
    PrevTab,
    MoveTab { id: u32, to: usize },

    // -- Navigation (active tab) --
    Navigate(String),
    GoBack,
    GoForward,
    Reload,
    GoHome,
    FocusAddressBar,

    // -- Page (active tab) --
    Find(FindRequest),
    FindNext,
    FindPrev,
    ZoomIn,
    ZoomOut,
    ZoomReset,
    Edit(EditCommand),
    ToggleInspector,
    ToggleSmoothScrolling,

    // -- Window --
    ToggleFullscreen,
    About,
    Quit,

    // -- Noop --
    None,
}
