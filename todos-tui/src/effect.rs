//! Effects - remote work declared by the UI reducer
//!
//! The reducer stays synchronous; the runtime maps each effect onto the
//! matching `TodoActions` call.

use todos_core::{Filter, TodoDraft, TodoId};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    AddTodo(TodoDraft),
    UpdateTodo { id: TodoId, fields: TodoDraft },
    RemoveTodo(TodoId),
    ToggleAll(bool),
    /// Local only, applied without a task
    ChangeFilter(Filter),
    Refresh,
}

impl Effect {
    /// Operation name used for task keys, logs and the status bar
    pub fn op(&self) -> &'static str {
        match self {
            Effect::AddTodo(_) => "add",
            Effect::UpdateTodo { .. } => "update",
            Effect::RemoveTodo(_) => "remove",
            Effect::ToggleAll(_) => "toggle all",
            Effect::ChangeFilter(_) => "filter",
            Effect::Refresh => "refresh",
        }
    }
}
