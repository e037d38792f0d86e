use crate::types::EditCommand;

use super::{Action, FindRequest};

impl Action {
    /// Human-readable label for menus and tooltips.
    pub fn label(&self) -> &'static str {
        match self {
            Action::NewTab => "New Tab",
            Action::CloseActiveTab | Action::CloseTab(_) => "Close Tab",
            Action::SelectTab(_) => "Select Tab",
            Action::SelectTabIndex(0) => "Select Tab 1",
            Action::SelectTabIndex(1) => "Select Tab 2",
            Action::SelectTabIndex(2) => "Select Tab 3",
            Action::SelectTabIndex(3) => "Select Tab 4",
            Action::SelectTabIndex(4) => "Select Tab 5",
            Action::SelectTabIndex(5) => "Select Tab 6",
            Action::SelectTabIndex(6) => "Select Tab 7",
            Action::SelectTabIndex(7) => "Select Tab 8",
            Action::SelectTabIndex(8) => "Select Last Tab",
            Action::SelectTabIndex(_) => "Select Tab",
            Action::NextTab => "Next Tab",
            Action::PrevTab => "Previous Tab",
            Action::MoveTab { .. } => "Move Tab",
            Action::Navigate(_) => "Open Location",
            Action::GoBack => "Back",
            Action::GoForward => "Forward",
            Action::Reload => "Reload",
            Action::GoHome => "Home",
            Action::FocusAddressBar => "Focus Address Bar",
            Action::Find(_) => "Find",
            Action::FindNext => "Find Next",
            Action::FindPrev => "Find Previous",
            Action::ZoomIn => "Zoom In",
            Action::ZoomOut => "Zoom Out",
            Action::ZoomReset => "Actual Size",
            Action::Edit(EditCommand::Cut) => "Cut",
            Action::Edit(EditCommand::Copy) => "Copy",
            Action::Edit(EditCommand::Paste) => "Paste",
            Action::Edit(EditCommand::Delete) => "Delete",
            Action::Edit(EditCommand::SelectAll) => "Select All",
            Action::ToggleInspector => "Web Inspector",
            Action::ToggleSmoothScrolling => "Smooth Scrolling",
            Action::ToggleFullscreen => "Toggle Fullscreen",
            Action::About => "About",
            Action::Quit => "Quit",
            Action::None => "None",
        }
    }

    /// Actions offered in the toolbar menu, in display order.
    pub fn menu_actions() -> Vec<Action> {
        vec![
            Action::NewTab,
            Action::CloseActiveTab,
            Action::Edit(EditCommand::Cut),
            Action::Edit(EditCommand::Copy),
            Action::Edit(EditCommand::Paste),
            Action::Edit(EditCommand::Delete),
            Action::Edit(EditCommand::SelectAll),
            Action::ZoomIn,
            Action::ZoomOut,
            Action::ZoomReset,
            Action::Find(FindRequest::default()),
            Action::ToggleSmoothScrolling,
            Action::ToggleInspector,
            Action::ToggleFullscreen,
            Action::About,
            Action::Quit,
        ]
    }
}
