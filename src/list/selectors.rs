//! Read-only views into [`ListState`].
//!
//! Views go through these instead of touching fields, so the state layout
//! can change without touching every caller.

use super::state::ListState;

/// The items, in display order.
///
/// The borrow is shared, so callers cannot change the state through it.
pub fn get_items(state: &ListState) -> &[String] {
    &state.items
}

/// The active error message, if any.
pub fn get_error(state: &ListState) -> Option<&str> {
    if state.error.is_empty() {
        None
    } else {
        Some(&state.error)
    }
}
