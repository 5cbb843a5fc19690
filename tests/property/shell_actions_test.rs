//! Property-based tests for BrowserShell action dispatch and rendering.
//!
//! Any sequence of actions drawn from the rendered controls keeps the
//! rendered tree consistent with state: one active entry, one entry per
//! tab, and an extension panel exactly when the menu is open.

use chromelike::shell::BrowserShell;
use chromelike::types::action::ShellAction;
use chromelike::types::tab::TabId;
use chromelike::ui::view::Element;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum UiOp {
    Add,
    SelectAt(usize),
    RemoveAt(usize),
    ClickCloseAt(usize),
    Toggle,
}

fn arb_ui_ops() -> impl Strategy<Value = Vec<UiOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(UiOp::Add),
            2 => (0..16usize).prop_map(UiOp::SelectAt),
            2 => (0..16usize).prop_map(UiOp::RemoveAt),
            2 => (0..16usize).prop_map(UiOp::ClickCloseAt),
            1 => Just(UiOp::Toggle),
        ],
        1..50,
    )
}

fn tab_at(shell: &BrowserShell, idx: usize) -> TabId {
    let tabs = shell.tabs();
    tabs[idx % tabs.len()].id
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn rendered_tree_matches_state(ops in arb_ui_ops()) {
        let mut shell = BrowserShell::new();

        for op in &ops {
            match op {
                UiOp::Add => shell.dispatch(ShellAction::AddTab),
                UiOp::SelectAt(i) => {
                    let id = tab_at(&shell, *i);
                    shell.dispatch(ShellAction::SelectTab { id });
                }
                UiOp::RemoveAt(i) => {
                    let id = tab_at(&shell, *i);
                    shell.dispatch(ShellAction::RemoveTab { id });
                }
                UiOp::ClickCloseAt(i) => {
                    let id = tab_at(&shell, *i);
                    let action = ShellAction::RemoveTab { id };
                    let active_before = shell.active_tab_id();
                    let fired = shell
                        .click_where(&|e: &Element| e.on_click.map(|h| h.action) == Some(action))
                        .expect("close button rendered for every tab");
                    prop_assert_eq!(fired, vec![action]);
                    if id != active_before {
                        prop_assert_eq!(shell.active_tab_id(), active_before);
                    }
                }
                UiOp::Toggle => shell.dispatch(ShellAction::ToggleExtensionMenu),
            }

            let tree = shell.render();
            prop_assert_eq!(tree.find_all_by_class("tab-close").len(), shell.tabs().len());
            let active = tree.find_all_by_class("active");
            prop_assert_eq!(active.len(), 1);
            let expected_id = format!("tab-{}", shell.active_tab_id());
            prop_assert_eq!(active[0].get_attr("id"), Some(expected_id.as_str()));
            prop_assert_eq!(
                tree.find_by_id("extension-panel").is_some(),
                shell.extension_menu_open()
            );
            prop_assert!(tree.find_by_id("add-tab").is_some());
        }
    }

    #[test]
    fn toggle_is_an_involution(prefix in 0usize..5) {
        let mut shell = BrowserShell::new();
        for _ in 0..prefix {
            shell.toggle_extension_menu();
        }
        let before = shell.extension_menu_open();
        shell.toggle_extension_menu();
        shell.toggle_extension_menu();
        prop_assert_eq!(shell.extension_menu_open(), before);
    }

    #[test]
    fn actions_survive_the_ipc_wire_format(id in 1u32..1000) {
        for action in [
            ShellAction::AddTab,
            ShellAction::ToggleExtensionMenu,
            ShellAction::SelectTab { id: TabId(id) },
            ShellAction::RemoveTab { id: TabId(id) },
        ] {
            let json = serde_json::to_string(&action).unwrap();
            let expected_cmd = format!("\"cmd\":\"{}\"", action.command());
            prop_assert!(json.contains(&expected_cmd));
            let back: ShellAction = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, action);
        }
    }
}
