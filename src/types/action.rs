use serde::{Deserialize, Serialize};

use super::tab::TabId;

/// A user interaction the shell knows how to apply.
///
/// This is also the IPC wire format: `{"cmd":"remove_tab","id":2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum ShellAction {
    SelectTab { id: TabId },
    AddTab,
    RemoveTab { id: TabId },
    ToggleExtensionMenu,
}

impl ShellAction {
    /// The `cmd` tag this action serializes under.
    pub fn command(&self) -> &'static str {
        match self {
            ShellAction::SelectTab { .. } => "select_tab",
            ShellAction::AddTab => "add_tab",
            ShellAction::RemoveTab { .. } => "remove_tab",
            ShellAction::ToggleExtensionMenu => "toggle_extension_menu",
        }
    }

    /// The tab this action targets, if any.
    pub fn tab_id(&self) -> Option<TabId> {
        match self {
            ShellAction::SelectTab { id } | ShellAction::RemoveTab { id } => Some(*id),
            ShellAction::AddTab | ShellAction::ToggleExtensionMenu => None,
        }
    }
}
