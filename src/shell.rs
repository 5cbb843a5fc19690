//! The browser shell component.
//!
//! Owns all application state for one UI session: the tab strip and the
//! extension menu flag. Every user interaction arrives as a [`ShellAction`],
//! either decoded from the webview or produced by [`BrowserShell::click`].

use tracing::debug;

use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::types::action::ShellAction;
use crate::types::config::ShellConfig;
use crate::types::tab::{Tab, TabId, TabIdPolicy};
use crate::ui::render;
use crate::ui::view::Element;

pub struct BrowserShell {
    tabs: TabManager,
    extension_menu_open: bool,
}

impl BrowserShell {
    /// Mount a shell with one default tab, active, and the extension panel closed.
    pub fn new() -> Self {
        Self::with_policy(TabIdPolicy::default())
    }

    pub fn with_policy(policy: TabIdPolicy) -> Self {
        Self {
            tabs: TabManager::with_policy(policy),
            extension_menu_open: false,
        }
    }

    pub fn from_config(config: &ShellConfig) -> Self {
        Self::with_policy(config.tab_id_policy)
    }

    pub fn tabs(&self) -> &[Tab] {
        self.tabs.get_all_tabs()
    }

    pub fn active_tab_id(&self) -> TabId {
        self.tabs.active_tab_id()
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tabs.get_active_tab()
    }

    pub fn extension_menu_open(&self) -> bool {
        self.extension_menu_open
    }

    pub fn select_tab(&mut self, id: TabId) {
        self.tabs.switch_tab(id);
    }

    pub fn add_tab(&mut self) -> TabId {
        self.tabs.create_tab()
    }

    /// Close a tab. Closing the only open tab does nothing.
    pub fn remove_tab(&mut self, id: TabId) -> bool {
        self.tabs.close_tab(id)
    }

    pub fn toggle_extension_menu(&mut self) {
        self.extension_menu_open = !self.extension_menu_open;
        debug!(open = self.extension_menu_open, "extension menu toggled");
    }

    pub fn dispatch(&mut self, action: ShellAction) {
        debug!(?action, "dispatch");
        match action {
            ShellAction::SelectTab { id } => self.select_tab(id),
            ShellAction::AddTab => {
                self.add_tab();
            }
            ShellAction::RemoveTab { id } => {
                self.remove_tab(id);
            }
            ShellAction::ToggleExtensionMenu => self.toggle_extension_menu(),
        }
    }

    pub fn render(&self) -> Element {
        render::render_shell(
            self.tabs.get_all_tabs(),
            self.tabs.active_tab_id(),
            self.extension_menu_open,
        )
    }

    /// Full HTML document for the current state.
    pub fn page_html(&self) -> String {
        render::page_html(&self.render())
    }

    /// Click the rendered element at `path` (child indices from the root).
    ///
    /// Handlers run innermost first and bubbling stops at the first handler
    /// that stops propagation. All handlers are resolved against the tree as
    /// it was before the click. Returns the actions that were applied.
    pub fn click(&mut self, path: &[usize]) -> Vec<ShellAction> {
        let actions: Vec<ShellAction> = self
            .render()
            .handlers_along(path)
            .into_iter()
            .map(|h| h.action)
            .collect();
        for action in &actions {
            self.dispatch(*action);
        }
        actions
    }

    /// Click the first rendered element matching `pred`. Returns `None` if nothing matches.
    pub fn click_where(&mut self, pred: &dyn Fn(&Element) -> bool) -> Option<Vec<ShellAction>> {
        let path = self.render().path_to(pred)?;
        Some(self.click(&path))
    }
}

impl Default for BrowserShell {
    fn default() -> Self {
        Self::new()
    }
}
