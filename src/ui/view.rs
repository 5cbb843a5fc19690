//! Declarative element tree produced by the shell's render pass.
//!
//! The tree is plain data: it can be serialized to HTML for the webview,
//! queried in tests, and clicked through [`Element::handlers_along`] without
//! any browser involved.

use std::fmt::Write;

use crate::types::action::ShellAction;

/// A click handler attached to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handler {
    pub action: ShellAction,
    /// When set, the click does not reach handlers on ancestor elements.
    pub stop_propagation: bool,
}

/// One node of the rendered tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
    pub on_click: Option<Handler>,
}

/// Tags serialized without a closing tag.
const VOID_TAGS: &[&str] = &["img", "input"];

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
            on_click: None,
        }
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes
            .extend(class.split_whitespace().map(str::to_string));
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push((name.to_string(), value.into()));
        self
    }

    /// Shorthand for the `id` attribute.
    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn on_click(mut self, action: ShellAction) -> Self {
        self.on_click = Some(Handler {
            action,
            stop_propagation: false,
        });
        self
    }

    /// Like [`Element::on_click`], but the click stops here.
    pub fn on_click_stop(mut self, action: ShellAction) -> Self {
        self.on_click = Some(Handler {
            action,
            stop_propagation: true,
        });
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Depth-first pre-order walk over this element and its descendants.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.descendants());
        }
        out
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.descendants()
            .into_iter()
            .find(|e| e.get_attr("id") == Some(id))
    }

    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.has_class(class))
            .collect()
    }

    /// Child-index path from this element to the first descendant matching `pred`.
    pub fn path_to(&self, pred: &dyn Fn(&Element) -> bool) -> Option<Vec<usize>> {
        if pred(self) {
            return Some(Vec::new());
        }
        self.children.iter().enumerate().find_map(|(i, child)| {
            child.path_to(pred).map(|mut rest| {
                rest.insert(0, i);
                rest
            })
        })
    }

    /// Handlers a click on the element at `path` fires, innermost first.
    ///
    /// Bubbling halts after the first handler with `stop_propagation`. An
    /// invalid path yields no handlers.
    pub fn handlers_along(&self, path: &[usize]) -> Vec<Handler> {
        let mut chain = Vec::with_capacity(path.len() + 1);
        let mut node = self;
        chain.push(node);
        for &i in path {
            match node.children.get(i) {
                Some(child) => {
                    node = child;
                    chain.push(node);
                }
                None => return Vec::new(),
            }
        }

        let mut fired = Vec::new();
        for handler in chain.iter().rev().filter_map(|e| e.on_click) {
            fired.push(handler);
            if handler.stop_propagation {
                break;
            }
        }
        fired
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.join(" ")));
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        if let Some(handler) = &self.on_click {
            let _ = write!(out, " data-action=\"{}\"", handler.action.command());
            if let Some(id) = handler.action.tab_id() {
                let _ = write!(out, " data-tab-id=\"{}\"", id);
            }
            if handler.stop_propagation {
                out.push_str(" data-stop=\"true\"");
            }
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        if let Some(text) = &self.text {
            out.push_str(&escape(text));
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
