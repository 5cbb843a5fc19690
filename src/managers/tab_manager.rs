use tracing::{debug, warn};

use crate::types::tab::{Tab, TabId, TabIdPolicy};

/// Trait defining the tab management interface.
pub trait TabManagerTrait {
    fn create_tab(&mut self) -> TabId;
    fn close_tab(&mut self, tab_id: TabId) -> bool;
    fn switch_tab(&mut self, tab_id: TabId) -> bool;
    fn get_tab(&self, tab_id: TabId) -> Option<&Tab>;
    fn get_all_tabs(&self) -> &[Tab];
    fn get_active_tab(&self) -> Option<&Tab>;
    fn active_tab_id(&self) -> TabId;
    fn tab_count(&self) -> usize;
}

/// In-memory tab strip state: the open tabs in display order and the active one.
///
/// Never empty. Construction opens the default tab `1`.
#[derive(Debug, Clone)]
pub struct TabManager {
    tabs: Vec<Tab>,
    active_tab_id: TabId,
    policy: TabIdPolicy,
    next_id: u32,
}

impl TabManager {
    pub fn new() -> Self {
        Self::with_policy(TabIdPolicy::default())
    }

    pub fn with_policy(policy: TabIdPolicy) -> Self {
        let first = TabId(1);
        Self {
            tabs: vec![Tab::placeholder(first)],
            active_tab_id: first,
            policy,
            next_id: 2,
        }
    }

    pub fn policy(&self) -> TabIdPolicy {
        self.policy
    }

    fn allocate_id(&mut self) -> TabId {
        match self.policy {
            TabIdPolicy::Monotonic => {
                let id = TabId(self.next_id);
                self.next_id += 1;
                id
            }
            TabIdPolicy::CountBased => TabId(self.tabs.len() as u32 + 1),
        }
    }

    fn contains(&self, tab_id: TabId) -> bool {
        self.tabs.iter().any(|t| t.id == tab_id)
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TabManagerTrait for TabManager {
    /// Append a placeholder tab and make it active. Returns the new tab's id.
    fn create_tab(&mut self) -> TabId {
        let id = self.allocate_id();
        if self.contains(id) {
            warn!(tab_id = %id, "count-based id collides with an open tab");
        }
        self.tabs.push(Tab::placeholder(id));
        self.active_tab_id = id;
        debug!(tab_id = %id, count = self.tabs.len(), "tab created");
        id
    }

    /// Remove every tab with the given id.
    ///
    /// No-op if that would empty the strip or if no tab matches. When the
    /// active tab goes away, the first tab of the old order that survives
    /// becomes active. Returns whether anything was removed.
    fn close_tab(&mut self, tab_id: TabId) -> bool {
        let survivors = self.tabs.iter().filter(|t| t.id != tab_id).count();
        if survivors == self.tabs.len() {
            return false;
        }
        if survivors == 0 {
            debug!(tab_id = %tab_id, "refusing to close the last tab");
            return false;
        }

        let was_active = self.active_tab_id == tab_id;
        self.tabs.retain(|t| t.id != tab_id);

        if was_active {
            // Old order minus the removed id: the survivors keep their relative order.
            self.active_tab_id = self.tabs[0].id;
        }
        debug!(tab_id = %tab_id, active = %self.active_tab_id, count = self.tabs.len(), "tab closed");
        true
    }

    /// Make the given tab active. Unknown ids are ignored.
    fn switch_tab(&mut self, tab_id: TabId) -> bool {
        if !self.contains(tab_id) {
            warn!(tab_id = %tab_id, "ignoring switch to unknown tab");
            return false;
        }
        self.active_tab_id = tab_id;
        true
    }

    fn get_tab(&self, tab_id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn get_all_tabs(&self) -> &[Tab] {
        &self.tabs
    }

    fn get_active_tab(&self) -> Option<&Tab> {
        self.get_tab(self.active_tab_id)
    }

    fn active_tab_id(&self) -> TabId {
        self.active_tab_id
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }
}
