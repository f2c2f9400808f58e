//! Base trait for actions in MVI architecture.

/// Marker trait for action objects.
///
/// Actions represent:
/// - User input (add, edit, delete commands)
/// - Deserialized messages from another process or a script
///
/// Actions are processed by reducers to produce new states.
pub trait Action: Clone + std::fmt::Debug + Send + 'static {
    /// Stable tag naming the action kind, used for logging and history.
    fn kind(&self) -> &'static str;
}
