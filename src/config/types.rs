use serde::{Deserialize, Serialize};

use crate::list::{ListState, DEFAULT_EDIT_SUFFIX};
use crate::mvi::DEFAULT_HISTORY_LIMIT;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub list: ListConfig,
}

/// Settings for the state store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Items the list starts with (default: "hi", "hello").
    #[serde(default = "default_initial_items")]
    pub initial_items: Vec<String>,
    /// Number of dispatched actions kept in the history (default: 100).
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

/// Settings for the list controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Appended to an item by the "mark edited" control (default: " - Edited").
    #[serde(default = "default_edit_suffix")]
    pub edit_suffix: String,
}

fn default_initial_items() -> Vec<String> {
    ListState::default().items
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_edit_suffix() -> String {
    DEFAULT_EDIT_SUFFIX.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_items: default_initial_items(),
            history_limit: default_history_limit(),
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            edit_suffix: default_edit_suffix(),
        }
    }
}

impl Config {
    /// The state a freshly created store should hold.
    pub fn initial_state(&self) -> ListState {
        ListState::with_items(self.store.initial_items.iter().cloned())
    }
}
