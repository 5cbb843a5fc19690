use std::fmt;

use serde::{Deserialize, Serialize};

/// Title given to every newly opened tab.
pub const NEW_TAB_TITLE: &str = "New Tab";

/// Placeholder URL carried by every newly opened tab.
pub const NEW_TAB_URL: &str = "https://www.google.com";

/// Identifier of an open tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(pub u32);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents one open browser tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub title: String,
    pub url: String,
}

impl Tab {
    /// A fresh tab with the placeholder title and URL.
    pub fn placeholder(id: TabId) -> Self {
        Self {
            id,
            title: NEW_TAB_TITLE.to_string(),
            url: NEW_TAB_URL.to_string(),
        }
    }
}

/// How new tab ids are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabIdPolicy {
    /// Strictly increasing counter; ids are never reused in a session.
    #[default]
    Monotonic,
    /// `tab count + 1`. Can hand out an id that is still open after a removal.
    CountBased,
}
