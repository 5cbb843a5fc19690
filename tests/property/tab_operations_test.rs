//! Property-based tests for Tab Manager operations.
//!
//! These tests verify the tab strip invariants: for any sequence of creates,
//! closes and switches the strip is never empty, the active id always names
//! an open tab, and the count tracks creates minus successful closes.

use chromelike::managers::tab_manager::{TabManager, TabManagerTrait};
use chromelike::types::tab::{TabId, TabIdPolicy};
use proptest::prelude::*;

/// Operations that can be performed on the TabManager.
#[derive(Debug, Clone)]
enum TabOp {
    Create,
    Close(usize), // index into the current tab list
    Switch(usize),
}

/// Strategy for generating a sequence of tab operations.
/// We bias toward more creates than closes to keep interesting state.
fn arb_tab_ops() -> impl Strategy<Value = Vec<TabOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(TabOp::Create),
            2 => (0..20usize).prop_map(TabOp::Close),
            1 => (0..20usize).prop_map(TabOp::Switch),
        ],
        1..60,
    )
}

fn arb_policy() -> impl Strategy<Value = TabIdPolicy> {
    prop_oneof![Just(TabIdPolicy::Monotonic), Just(TabIdPolicy::CountBased)]
}

fn pick(manager: &TabManager, idx: usize) -> TabId {
    let tabs = manager.get_all_tabs();
    tabs[idx % tabs.len()].id
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn strip_never_empty_and_active_always_open(
        policy in arb_policy(),
        ops in arb_tab_ops()
    ) {
        let mut manager = TabManager::with_policy(policy);

        for op in &ops {
            match op {
                TabOp::Create => { manager.create_tab(); }
                TabOp::Close(idx) => {
                    let id = pick(&manager, *idx);
                    manager.close_tab(id);
                }
                TabOp::Switch(idx) => {
                    let id = pick(&manager, *idx);
                    manager.switch_tab(id);
                }
            }

            prop_assert!(manager.tab_count() >= 1, "strip emptied after {:?}", op);
            let active = manager.active_tab_id();
            prop_assert!(
                manager.get_all_tabs().iter().any(|t| t.id == active),
                "active id {} not open after {:?}", active, op
            );
        }
    }

    #[test]
    fn monotonic_count_tracks_creates_minus_closes(ops in arb_tab_ops()) {
        let mut manager = TabManager::new();
        let mut expected_count: usize = 1;

        for op in &ops {
            match op {
                TabOp::Create => {
                    let id = manager.create_tab();
                    expected_count += 1;
                    prop_assert_eq!(manager.active_tab_id(), id);
                }
                TabOp::Close(idx) => {
                    let id = pick(&manager, *idx);
                    let is_last = manager.tab_count() == 1;
                    let removed = manager.close_tab(id);
                    prop_assert_eq!(removed, !is_last);
                    if removed {
                        expected_count -= 1;
                    }
                }
                TabOp::Switch(idx) => {
                    let id = pick(&manager, *idx);
                    prop_assert!(manager.switch_tab(id));
                    prop_assert_eq!(manager.active_tab_id(), id);
                }
            }

            prop_assert_eq!(manager.tab_count(), expected_count);
        }
    }

    #[test]
    fn monotonic_ids_are_unique_and_increasing(ops in arb_tab_ops()) {
        let mut manager = TabManager::new();
        for op in &ops {
            match op {
                TabOp::Create => { manager.create_tab(); }
                TabOp::Close(idx) => {
                    let id = pick(&manager, *idx);
                    manager.close_tab(id);
                }
                TabOp::Switch(_) => {}
            }
            let ids: Vec<u32> = manager.get_all_tabs().iter().map(|t| t.id.0).collect();
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids not increasing: {:?}", ids);
        }
    }

    #[test]
    fn adding_n_tabs_grows_count_by_n(n in 0usize..30) {
        let mut manager = TabManager::new();
        manager.create_tab();
        let k = manager.tab_count();
        for _ in 0..n {
            let id = manager.create_tab();
            prop_assert_eq!(manager.active_tab_id(), id);
        }
        prop_assert_eq!(manager.tab_count(), k + n);
    }
}
