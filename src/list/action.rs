//! Actions for the list editor and their constructors.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

use crate::mvi::Action;

/// Actions that can be dispatched to the list reducer.
///
/// Serialized as `{"type": "ADD_ITEM", "payload": {"item": "..."}}`.
/// Any other `type` reads as [`ListAction::Unknown`], whatever its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireAction", into = "WireAction")]
pub enum ListAction {
    /// Dismiss the current error message.
    ClearError,

    /// Append an item. A missing or null item is read as empty.
    AddItem { item: String },

    /// Replace the item at `index`.
    EditItem { index: usize, item: String },

    /// Remove the item at `index`.
    DeleteItem { index: usize },

    /// Remove every item whose position appears in `indexes`.
    DeleteItems { indexes: Vec<usize> },

    /// Any action type this reducer does not know about.
    Unknown,
}

impl Action for ListAction {
    fn kind(&self) -> &'static str {
        match self {
            ListAction::ClearError => "CLEAR_ERROR",
            ListAction::AddItem { .. } => "ADD_ITEM",
            ListAction::EditItem { .. } => "EDIT_ITEM",
            ListAction::DeleteItem { .. } => "DELETE_ITEM",
            ListAction::DeleteItems { .. } => "DELETE_ITEMS",
            ListAction::Unknown => "UNKNOWN",
        }
    }
}

/// Envelope every action travels in. The payload stays untyped until the
/// tag says what it should hold.
#[derive(Debug, Serialize, Deserialize)]
struct WireAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload: Option<Value>,
}

#[derive(Deserialize)]
struct AddItemPayload {
    #[serde(default, deserialize_with = "null_as_empty")]
    item: String,
}

#[derive(Deserialize)]
struct EditItemPayload {
    index: usize,
    item: String,
}

#[derive(Deserialize)]
struct DeleteItemPayload {
    index: usize,
}

#[derive(Deserialize)]
struct DeleteItemsPayload {
    indexes: Vec<usize>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn payload<T: DeserializeOwned>(payload: Option<Value>) -> Result<T, serde_json::Error> {
    let value = payload.ok_or_else(|| serde_json::Error::missing_field("payload"))?;
    serde_json::from_value(value)
}

impl TryFrom<WireAction> for ListAction {
    type Error = serde_json::Error;

    fn try_from(wire: WireAction) -> Result<Self, Self::Error> {
        let action = match wire.kind.as_str() {
            "CLEAR_ERROR" => ListAction::ClearError,
            "ADD_ITEM" => {
                let AddItemPayload { item } = payload(wire.payload)?;
                ListAction::AddItem { item }
            }
            "EDIT_ITEM" => {
                let EditItemPayload { index, item } = payload(wire.payload)?;
                ListAction::EditItem { index, item }
            }
            "DELETE_ITEM" => {
                let DeleteItemPayload { index } = payload(wire.payload)?;
                ListAction::DeleteItem { index }
            }
            "DELETE_ITEMS" => {
                let DeleteItemsPayload { indexes } = payload(wire.payload)?;
                ListAction::DeleteItems { indexes }
            }
            _ => ListAction::Unknown,
        };
        Ok(action)
    }
}

impl From<ListAction> for WireAction {
    fn from(action: ListAction) -> Self {
        let kind = action.kind().to_string();
        let payload = match action {
            ListAction::ClearError | ListAction::Unknown => None,
            ListAction::AddItem { item } => Some(json!({ "item": item })),
            ListAction::EditItem { index, item } => Some(json!({ "index": index, "item": item })),
            ListAction::DeleteItem { index } => Some(json!({ "index": index })),
            ListAction::DeleteItems { indexes } => Some(json!({ "indexes": indexes })),
        };
        WireAction { kind, payload }
    }
}

pub fn add_item(item: impl Into<String>) -> ListAction {
    ListAction::AddItem { item: item.into() }
}

pub fn edit_item(index: usize, item: impl Into<String>) -> ListAction {
    ListAction::EditItem {
        index,
        item: item.into(),
    }
}

pub fn delete_item(index: usize) -> ListAction {
    ListAction::DeleteItem { index }
}

pub fn delete_items(indexes: impl IntoIterator<Item = usize>) -> ListAction {
    ListAction::DeleteItems {
        indexes: indexes.into_iter().collect(),
    }
}

pub fn clear_error() -> ListAction {
    ListAction::ClearError
}
