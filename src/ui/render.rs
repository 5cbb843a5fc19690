//! Render pass: shell state in, element tree out.
//!
//! Layout mirrors a Chrome-style window: header (tab strip, then the
//! navigation bar with search field and extension area) above a content area
//! with a welcome banner and the quick-access grid.

use crate::types::action::ShellAction;
use crate::types::tab::{Tab, TabId};
use crate::ui::view::Element;

pub const SEARCH_PLACEHOLDER: &str = "Search Google or type a URL";
pub const EXTENSION_PANEL_TITLE: &str = "Add Extension";
pub const INSTALL_FROM_STORE_LABEL: &str = "Install Chrome Extension";
pub const LOAD_UNPACKED_LABEL: &str = "Load Unpacked Extension (.zip)";
pub const WELCOME_HEADING: &str = "Welcome to ChromeLike";
pub const WELCOME_SUBTITLE: &str = "Your modern browser experience";
pub const QUICK_ACCESS_TILES: u32 = 4;

/// Id of the element the page script replaces on every re-render.
pub const ROOT_ID: &str = "app";

const SHELL_CSS: &str = include_str!("../../resources/ui/shell.css");
const SHELL_JS: &str = include_str!("../../resources/ui/shell.js");

/// Build the whole visual tree for the given state.
pub fn render_shell(tabs: &[Tab], active_tab_id: TabId, extension_menu_open: bool) -> Element {
    Element::new("div")
        .id(ROOT_ID)
        .class("shell")
        .child(
            Element::new("header")
                .class("header")
                .child(tab_strip(tabs, active_tab_id))
                .child(nav_bar(extension_menu_open)),
        )
        .child(content_area())
}

/// Wrap a rendered tree in a complete HTML document with styles and the click bridge.
pub fn page_html(root: &Element) -> String {
    let body = root.to_html();
    let mut html =
        String::with_capacity(body.len() + SHELL_CSS.len() + SHELL_JS.len() + 256);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><title>ChromeLike</title><style>");
    html.push_str(SHELL_CSS);
    html.push_str("</style></head><body>");
    html.push_str(&body);
    html.push_str("<script>");
    html.push_str(SHELL_JS);
    html.push_str("</script></body></html>");
    html
}

fn tab_strip(tabs: &[Tab], active_tab_id: TabId) -> Element {
    let entries = tabs.iter().map(|tab| tab_entry(tab, tab.id == active_tab_id));

    Element::new("div")
        .class("tab-bar")
        .child(Element::new("div").id("tab-strip").class("tab-strip").children(entries))
        .child(
            Element::new("button")
                .id("add-tab")
                .class("icon-button")
                .attr("title", "New tab")
                .text("+")
                .on_click(ShellAction::AddTab),
        )
}

fn tab_entry(tab: &Tab, active: bool) -> Element {
    Element::new("div")
        .id(&format!("tab-{}", tab.id))
        .class(if active { "tab active" } else { "tab inactive" })
        .attr("tabindex", "0")
        .on_click(ShellAction::SelectTab { id: tab.id })
        .child(Element::new("span").class("tab-icon").text("\u{25CE}"))
        .child(Element::new("span").class("tab-title").text(tab.title.clone()))
        // Nested inside the tab body: the click must not also select the tab.
        .child(
            Element::new("button")
                .class("tab-close")
                .attr("title", "Close tab")
                .text("\u{2715}")
                .on_click_stop(ShellAction::RemoveTab { id: tab.id }),
        )
}

fn nav_bar(extension_menu_open: bool) -> Element {
    let nav_buttons = [
        ("nav-back", "Back", "\u{2039}"),
        ("nav-forward", "Forward", "\u{203A}"),
        ("nav-reload", "Reload", "\u{21BB}"),
        ("nav-home", "Home", "\u{2302}"),
    ]
    .into_iter()
    .map(|(id, title, glyph)| {
        Element::new("button")
            .id(id)
            .class("icon-button")
            .attr("title", title)
            .text(glyph)
    });

    Element::new("div")
        .class("nav-bar")
        .child(Element::new("div").class("nav-buttons").children(nav_buttons))
        .child(search_field())
        .child(extension_area(extension_menu_open))
}

fn search_field() -> Element {
    Element::new("div")
        .class("search")
        .child(Element::new("span").class("search-icon").text("\u{2315}"))
        .child(
            Element::new("input")
                .id("search-input")
                .attr("type", "text")
                .attr("placeholder", SEARCH_PLACEHOLDER),
        )
}

fn extension_area(extension_menu_open: bool) -> Element {
    let mut anchor = Element::new("div").class("extension-anchor").child(
        Element::new("button")
            .id("extension-toggle")
            .class("icon-button")
            .attr("title", "Extensions")
            .attr("aria-expanded", extension_menu_open.to_string())
            .text("\u{21EA}")
            .on_click(ShellAction::ToggleExtensionMenu),
    );

    if extension_menu_open {
        anchor = anchor.child(
            Element::new("div")
                .id("extension-panel")
                .class("extension-panel")
                .child(Element::new("h3").text(EXTENSION_PANEL_TITLE))
                .child(
                    Element::new("button")
                        .id("install-extension")
                        .class("panel-entry")
                        .text(INSTALL_FROM_STORE_LABEL),
                )
                .child(
                    Element::new("button")
                        .id("load-unpacked")
                        .class("panel-entry")
                        .text(LOAD_UNPACKED_LABEL),
                ),
        );
    }

    Element::new("div")
        .class("extension-area")
        .child(anchor)
        .child(
            Element::new("button")
                .id("settings")
                .class("icon-button")
                .attr("title", "Settings")
                .text("\u{2699}"),
        )
}

fn content_area() -> Element {
    let tiles = (1..=QUICK_ACCESS_TILES).map(|i| {
        Element::new("div")
            .class("quick-access-tile")
            .child(
                Element::new("img")
                    .attr(
                        "src",
                        format!("https://source.unsplash.com/random/100x100?technology&sig={}", i),
                    )
                    .attr("alt", "Quick access"),
            )
            .child(Element::new("span").text(format!("Quick Access {}", i)))
    });

    Element::new("main")
        .class("content")
        .child(
            Element::new("div")
                .class("welcome")
                .child(Element::new("h1").text(WELCOME_HEADING))
                .child(Element::new("p").text(WELCOME_SUBTITLE)),
        )
        .child(Element::new("div").id("quick-access").class("quick-access").children(tiles))
}
