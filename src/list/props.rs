//! Data handed to a list view.

use serde::Serialize;

use super::selectors::{get_error, get_items};
use super::state::ListState;

/// Suffix appended by the "mark edited" control.
pub const DEFAULT_EDIT_SUFFIX: &str = " - Edited";

/// What a list view needs to draw itself, built from the store state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListProps {
    pub error: Option<String>,
    pub items: Vec<String>,
}

impl ListProps {
    pub fn from_state(state: &ListState) -> Self {
        Self {
            error: get_error(state).map(str::to_owned),
            items: get_items(state).to_vec(),
        }
    }
}

/// Label written back by the edit control of a row.
pub fn edited_label(item: &str, suffix: &str) -> String {
    format!("{item}{suffix}")
}
