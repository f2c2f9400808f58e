//! Reducer trait for MVI architecture.

use super::action::Action;
use super::state::UiState;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action and return the new state.
    ///
    /// Must not fail, block or touch anything outside its arguments.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}

/// Fold a sequence of actions over `initial`.
///
/// Recomputes the state a store would hold after dispatching `actions`
/// in order, without notifying anyone.
pub fn replay<R, I>(initial: R::State, actions: I) -> R::State
where
    R: Reducer,
    I: IntoIterator<Item = R::Action>,
{
    actions.into_iter().fold(initial, R::reduce)
}
