// ChromeLike state managers
// Managers handle stateful operations: the tab strip.

pub mod tab_manager;
