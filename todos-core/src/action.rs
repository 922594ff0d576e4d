//! Action trait and the todo action records

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::model::{Filter, TodoId, TodoItem, TodoPatch};

/// Marker trait for actions that can be dispatched to a store
///
/// Actions represent intents to change state. They should be:
/// - Clone: Actions may be logged, replayed, or sent to multiple handlers
/// - Debug: For debugging and logging
/// - Send + 'static: For async dispatch across threads
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;

    /// Concise one-line description for logs.
    ///
    /// Defaults to the `Debug` output; override for data-heavy actions.
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}

/// A state transition consumed by the todos reducer
///
/// Serialized as `{ "type": ..., "payload": ... }`. Any unrecognized `type`
/// decodes to [`TodosAction::Unknown`], which the reducer ignores.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum TodosAction {
    /// Replace the whole list (startup seed or resync)
    GetTodos(Vec<TodoItem>),

    /// Append an item created by the remote store
    AddTodo(TodoItem),

    /// Set every item's completion flag
    ToggleAll(bool),

    /// Merge fields into the item with the matching id
    UpdateTodo(TodoPatch),

    /// Drop the item with the matching id
    RemoveTodo(TodoId),

    /// Select a different view filter
    ChangeFilter(Filter),

    #[serde(other)]
    Unknown,
}

impl Action for TodosAction {
    fn name(&self) -> &'static str {
        match self {
            TodosAction::GetTodos(_) => "getTodos",
            TodosAction::AddTodo(_) => "addTodo",
            TodosAction::ToggleAll(_) => "toggleAll",
            TodosAction::UpdateTodo(_) => "updateTodo",
            TodosAction::RemoveTodo(_) => "removeTodo",
            TodosAction::ChangeFilter(_) => "changeFilter",
            TodosAction::Unknown => "unknown",
        }
    }

    fn summary(&self) -> String {
        match self {
            // A full list is noise in the log, the count is enough
            TodosAction::GetTodos(todos) => format!("getTodos({} items)", todos.len()),
            TodosAction::AddTodo(item) => format!("addTodo(id={})", item.id),
            TodosAction::UpdateTodo(patch) => format!("updateTodo(id={})", patch.id),
            TodosAction::RemoveTodo(id) => format!("removeTodo(id={})", id),
            TodosAction::ToggleAll(flag) => format!("toggleAll({})", flag),
            TodosAction::ChangeFilter(filter) => format!("changeFilter({})", filter),
            TodosAction::Unknown => "unknown".to_string(),
        }
    }
}
