//! Reducer for the list editor.

use std::collections::HashSet;

use crate::mvi::Reducer;

use super::action::ListAction;
use super::state::ListState;

/// Error shown when an empty item is added.
pub const EMPTY_ITEM_ERROR: &str = "Item cannot be empty";

/// Whether `item` counts as "no item" when adding.
///
/// Only the empty string is blank. Null and missing items are turned into
/// the empty string when an action is deserialized. Whitespace is content.
pub fn is_blank(item: &str) -> bool {
    item.is_empty()
}

/// Reducer for list state transitions.
///
/// Indexes outside the current items are ignored: edit and delete leave
/// the list as it was, delete-many skips them.
pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Action = ListAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            ListAction::ClearError => ListState {
                error: String::new(),
                ..state
            },

            ListAction::AddItem { item } => {
                if is_blank(&item) {
                    return ListState {
                        error: EMPTY_ITEM_ERROR.to_string(),
                        ..state
                    };
                }
                // A previous error stays visible until cleared explicitly.
                let ListState { mut items, error } = state;
                items.push(item);
                ListState { items, error }
            }

            ListAction::EditItem { index, item } => {
                let ListState { mut items, error } = state;
                if let Some(slot) = items.get_mut(index) {
                    *slot = item;
                }
                ListState { items, error }
            }

            ListAction::DeleteItem { index } => {
                let ListState { mut items, error } = state;
                if index < items.len() {
                    items.remove(index);
                }
                ListState { items, error }
            }

            ListAction::DeleteItems { indexes } => {
                if indexes.is_empty() {
                    return state;
                }
                let doomed: HashSet<usize> = indexes.into_iter().collect();
                let ListState { items, error } = state;
                let items = items
                    .into_iter()
                    .enumerate()
                    .filter(|(index, _)| !doomed.contains(index))
                    .map(|(_, item)| item)
                    .collect();
                ListState { items, error }
            }

            ListAction::Unknown => state,
        }
    }
}
