//! UI-local state
//!
//! The todo list itself lives in `todos_core::TodosStore`. This is only what
//! the terminal front-end needs on top of it: focus, typed text, the row
//! being edited, and how many remote calls are in flight.

use todos_core::{TodoDraft, TodoId, TodoItem};

/// Which region receives key presses
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Input,
    List,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Input => Focus::List,
            Focus::List => Focus::Input,
        }
    }
}

/// A todo in editing mode
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Editing {
    pub id: TodoId,
    pub text: String,
    /// Completion flag at the time editing started, sent back unchanged
    pub is_completed: bool,
}

impl Editing {
    pub fn of(todo: &TodoItem) -> Self {
        Self {
            id: todo.id.clone(),
            text: todo.text.clone(),
            is_completed: todo.is_completed,
        }
    }

    /// Fields to PUT for a submitted edit; `None` when the text is blank
    pub fn submission(&self, text: &str) -> Option<TodoDraft> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(TodoDraft::new(text).with_completed(self.is_completed))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub focus: Focus,

    /// Text typed into the new-todo input
    pub input: String,

    pub editing: Option<Editing>,

    /// Selected row of the visible list. May point past the end after a
    /// removal; readers clamp it.
    pub selected: usize,

    /// Remote calls spawned and not yet finished
    pub pending: usize,

    /// Last remote failure, cleared by the next success
    pub status: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self, id: &TodoId) -> bool {
        self.editing.as_ref().is_some_and(|e| &e.id == id)
    }
}
