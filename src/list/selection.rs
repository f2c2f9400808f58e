//! Rows checked in a list view.
//!
//! Selection lives with the view, not in the store: it never reaches the
//! reducer except as the `DeleteItems` action it produces.

use std::collections::BTreeSet;

use super::action::{delete_items, ListAction};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    indexes: BTreeSet<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a row. Returns false if it was already checked.
    pub fn select(&mut self, index: usize) -> bool {
        self.indexes.insert(index)
    }

    /// Uncheck a row. Returns false if it was not checked.
    pub fn deselect(&mut self, index: usize) -> bool {
        self.indexes.remove(&index)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.indexes.contains(&index)
    }

    /// Checked rows in ascending order.
    pub fn selected(&self) -> Vec<usize> {
        self.indexes.iter().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    /// Build the action deleting every checked row, then uncheck them all.
    ///
    /// Returns `None` when nothing is checked. Indexes refer to the items
    /// at the time the rows were checked; dispatch the action before any
    /// other edit.
    pub fn take_delete_action(&mut self) -> Option<ListAction> {
        if self.indexes.is_empty() {
            return None;
        }
        let indexes = std::mem::take(&mut self.indexes);
        Some(delete_items(indexes))
    }
}
