//! A list editing session: one store plus the view-local selection.

use crate::config::Config;
use crate::list::{edited_label, get_items, ListAction, ListProps, ListReducer, Selection};
use crate::mvi::{Action, ActionRecord, Store};

use super::parser::Command;

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// An action of this kind was dispatched.
    Dispatched(&'static str),
    /// Only the selection changed.
    SelectionChanged,
    /// The command had nothing to act on.
    Skipped,
    Show(ListProps),
    History(Vec<ActionRecord<ListAction>>),
}

pub struct Session {
    store: Store<ListReducer>,
    selection: Selection,
    edit_suffix: String,
}

impl Session {
    pub fn new(store: Store<ListReducer>, edit_suffix: impl Into<String>) -> Self {
        Self {
            store,
            selection: Selection::new(),
            edit_suffix: edit_suffix.into(),
        }
    }

    /// Build a session whose store starts from the configured state.
    pub fn from_config(config: &Config) -> Self {
        let store = Store::with_history_limit(config.initial_state(), config.store.history_limit);
        Self::new(store, config.list.edit_suffix.clone())
    }

    pub fn store(&self) -> &Store<ListReducer> {
        &self.store
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn props(&self) -> ListProps {
        ListProps::from_state(&self.store.get_state())
    }

    pub fn execute(&mut self, command: Command) -> Outcome {
        match command {
            Command::Dispatch(action) => self.dispatch(action),

            Command::MarkEdited { index } => {
                let state = self.store.get_state();
                match get_items(&state).get(index) {
                    Some(item) => {
                        let label = edited_label(item, &self.edit_suffix);
                        self.dispatch(ListAction::EditItem { index, item: label })
                    }
                    None => {
                        tracing::debug!(index, "Nothing to mark as edited");
                        Outcome::Skipped
                    }
                }
            }

            Command::Select { index } => {
                self.selection.select(index);
                tracing::debug!(selected = ?self.selection.selected(), "Row checked");
                Outcome::SelectionChanged
            }

            Command::Deselect { index } => {
                self.selection.deselect(index);
                tracing::debug!(selected = ?self.selection.selected(), "Row unchecked");
                Outcome::SelectionChanged
            }

            Command::DeleteSelected => match self.selection.take_delete_action() {
                Some(action) => self.dispatch(action),
                None => Outcome::Skipped,
            },

            Command::Show => Outcome::Show(self.props()),

            Command::History => Outcome::History(self.store.history()),
        }
    }

    fn dispatch(&self, action: ListAction) -> Outcome {
        let kind = action.kind();
        self.store.dispatch(action);
        Outcome::Dispatched(kind)
    }
}
