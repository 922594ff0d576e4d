//! UI actions
//!
//! These describe what the user did in the terminal. They never touch the
//! shared todo list directly: the UI reducer turns them into [`Effect`]s and
//! the runtime carries those out against the todo store.
//!
//! Naming follows the usual convention: `Did` marks the result of an async
//! task.
//!
//! [`Effect`]: crate::effect::Effect

use todos_core::{Action, Filter, TodoId, TodoItem};

#[derive(Clone, Debug, PartialEq)]
pub enum UiAction {
    // ===== Header input =====
    /// New-todo input text changed
    InputChange(String),
    /// Enter pressed in the new-todo input
    InputSubmit(String),

    // ===== List =====
    /// Move the selection to this row of the visible list
    Select(usize),
    /// Flip the completion flag of this todo
    TodoToggle(TodoItem),
    /// Delete this todo
    TodoRemove(TodoId),
    /// Set every todo's completion flag
    ToggleAll(bool),

    // ===== Editing =====
    /// Start editing a todo, prefilled with its text
    EditStart(TodoItem),
    EditChange(String),
    EditSubmit(String),
    EditCancel,

    // ===== Footer =====
    ChangeFilter(Filter),

    // ===== Global =====
    /// Switch focus between the input and the list
    FocusNext,
    /// Re-fetch the whole collection
    Refresh,
    Quit,

    // ===== Task results =====
    /// A remote call finished and its result is already dispatched
    TaskDidComplete(&'static str),
    /// A remote call failed, nothing was dispatched
    TaskDidFail { op: &'static str, error: String },
}

impl Action for UiAction {
    fn name(&self) -> &'static str {
        match self {
            UiAction::InputChange(_) => "InputChange",
            UiAction::InputSubmit(_) => "InputSubmit",
            UiAction::Select(_) => "Select",
            UiAction::TodoToggle(_) => "TodoToggle",
            UiAction::TodoRemove(_) => "TodoRemove",
            UiAction::ToggleAll(_) => "ToggleAll",
            UiAction::EditStart(_) => "EditStart",
            UiAction::EditChange(_) => "EditChange",
            UiAction::EditSubmit(_) => "EditSubmit",
            UiAction::EditCancel => "EditCancel",
            UiAction::ChangeFilter(_) => "ChangeFilter",
            UiAction::FocusNext => "FocusNext",
            UiAction::Refresh => "Refresh",
            UiAction::Quit => "Quit",
            UiAction::TaskDidComplete(_) => "TaskDidComplete",
            UiAction::TaskDidFail { .. } => "TaskDidFail",
        }
    }

    /// Keystroke-level actions carry whole input strings; keep log lines short
    fn summary(&self) -> String {
        match self {
            UiAction::InputChange(text) | UiAction::EditChange(text) => {
                format!("{}({} chars)", self.name(), text.chars().count())
            }
            UiAction::TodoToggle(todo) | UiAction::EditStart(todo) => {
                format!("{}({})", self.name(), todo.id)
            }
            UiAction::TaskDidFail { op, error } => {
                let msg = if error.len() > 40 {
                    format!("{}...", error.chars().take(37).collect::<String>())
                } else {
                    error.clone()
                };
                format!("TaskDidFail({op}, {msg:?})")
            }
            _ => format!("{:?}", self),
        }
    }
}
