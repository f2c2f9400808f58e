//! State for the list editor.

use serde::{Deserialize, Serialize};

use crate::mvi::UiState;

/// Items shown by the list and the error currently displayed above it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    pub items: Vec<String>,
    /// Empty when no error is active.
    #[serde(default)]
    pub error: String,
}

impl Default for ListState {
    fn default() -> Self {
        Self::with_items(["hi", "hello"])
    }
}

impl UiState for ListState {}

impl ListState {
    /// State holding `items` and no error.
    pub fn with_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            error: String::new(),
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}
