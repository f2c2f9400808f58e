//! Line-oriented command language for driving a list session.
//!
//! One command per line. Blank lines and lines starting with `#` are
//! skipped. A line starting with `{` is read as a JSON-encoded action.

use thiserror::Error;

use crate::list::{add_item, clear_error, delete_item, delete_items, edit_item, ListAction};

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Send an action straight to the store.
    Dispatch(ListAction),
    /// Append the configured suffix to the item at `index`.
    MarkEdited { index: usize },
    Select { index: usize },
    Deselect { index: usize },
    /// Delete every selected row and clear the selection.
    DeleteSelected,
    Show,
    History,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command '{name}'")]
    UnknownCommand { name: String },

    #[error("'{command}' requires {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Invalid index '{value}': expected a non-negative integer")]
    InvalidIndex { value: String },

    #[error("Invalid action JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
}

/// Parse one line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    if line.starts_with('{') {
        let action: ListAction = serde_json::from_str(line)
            .map_err(|source| CommandError::InvalidJson { source })?;
        return Ok(Some(Command::Dispatch(action)));
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim_start()),
        None => (line, ""),
    };

    let command = match name {
        "add" => Command::Dispatch(add_item(rest)),
        "edit" => {
            let (index, text) = match rest.split_once(char::is_whitespace) {
                Some((index, text)) => (index, text.trim_start()),
                None => (rest, ""),
            };
            let index = required_index("edit", index)?;
            Command::Dispatch(edit_item(index, text))
        }
        "mark-edited" => Command::MarkEdited {
            index: required_index("mark-edited", rest)?,
        },
        "delete" => Command::Dispatch(delete_item(required_index("delete", rest)?)),
        "delete-many" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "delete-many",
                    argument: "at least one index",
                });
            }
            let indexes = rest
                .split_whitespace()
                .map(parse_index)
                .collect::<Result<Vec<_>, _>>()?;
            Command::Dispatch(delete_items(indexes))
        }
        "select" => Command::Select {
            index: required_index("select", rest)?,
        },
        "deselect" => Command::Deselect {
            index: required_index("deselect", rest)?,
        },
        "delete-selected" => Command::DeleteSelected,
        "clear-error" => Command::Dispatch(clear_error()),
        "show" => Command::Show,
        "history" => Command::History,
        other => {
            return Err(CommandError::UnknownCommand {
                name: other.to_string(),
            })
        }
    };

    Ok(Some(command))
}

fn required_index(command: &'static str, value: &str) -> Result<usize, CommandError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "an index",
        });
    }
    parse_index(value)
}

fn parse_index(value: &str) -> Result<usize, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidIndex {
        value: value.to_string(),
    })
}
