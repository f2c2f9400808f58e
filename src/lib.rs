//! Unidirectional state container for a list editing widget.
//!
//! Actions describe changes, [`list::ListReducer`] turns them into new
//! states, and [`mvi::Store`] owns the current state and tells listeners
//! about every change.

pub mod command;
pub mod config;
pub mod list;
pub mod logging;
pub mod mvi;
