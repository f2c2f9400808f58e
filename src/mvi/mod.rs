//! Model-View-Intent (MVI) primitives for unidirectional data flow.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Store::dispatch ──→ Reducer ──→ State
//!    ↑                                         │
//!    └──────────── listeners ←─────────────────┘
//! ```
//!
//! - **State**: Immutable value describing everything a view needs
//! - **Action**: A requested state transition (user input or system event)
//! - **Reducer**: Pure function that transforms state based on actions
//! - **Store**: Owns the current state and serializes dispatches

mod action;
mod reducer;
mod state;
mod store;

pub use action::Action;
pub use reducer::{replay, Reducer};
pub use state::UiState;
pub use store::{ActionRecord, Store, Subscription, DEFAULT_HISTORY_LIMIT};
