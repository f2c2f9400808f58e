//! Base trait for state values held by a store.

/// Marker trait for state objects.
///
/// A state is replaced, never edited, on every dispatch. Implementors
/// must be cheap enough to clone for snapshots and comparable so the
/// store can tell a real transition from an identity one.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {
    /// Whether moving from `previous` to `self` changed anything.
    fn changed_from(&self, previous: &Self) -> bool {
        self != previous
    }
}
