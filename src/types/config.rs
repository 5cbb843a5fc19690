use serde::{Deserialize, Serialize};

use super::tab::TabIdPolicy;

/// Startup configuration for the shell and its window.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub window_title: String,
    pub window_width: f64,
    pub window_height: f64,
    pub devtools: bool,
    pub tab_id_policy: TabIdPolicy,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            window_title: "ChromeLike".to_string(),
            window_width: 1280.0,
            window_height: 800.0,
            devtools: false,
            tab_id_policy: TabIdPolicy::default(),
        }
    }
}
