//! List editing feature module.
//!
//! Holds an ordered list of text items plus a displayable error message.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Items and error message
//! - `action.rs` - Add, edit, delete, delete-many, clear-error (+ constructors)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `selectors.rs` - Read-only views into the state
//! - `props.rs` - Data handed to a list view
//! - `selection.rs` - Checked rows, local to a list view

mod action;
mod props;
mod reducer;
mod selection;
mod selectors;
mod state;

pub use action::{add_item, clear_error, delete_item, delete_items, edit_item, ListAction};
pub use props::{edited_label, ListProps, DEFAULT_EDIT_SUFFIX};
pub use reducer::{is_blank, ListReducer, EMPTY_ITEM_ERROR};
pub use selection::Selection;
pub use selectors::{get_error, get_items};
pub use state::ListState;
