//! Todo data model - the shapes shared by the reducer, the remote client and the views
//!
//! Wire format follows the remote collection: `{ id, text, isCompleted }`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier assigned by the remote store when a todo is created.
///
/// Stores hand out either numeric or string ids, so both are accepted.
/// Ids are never generated on the client.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Number(u64),
    Text(String),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Number(n) => write!(f, "{}", n),
            TodoId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for TodoId {
    fn from(n: u64) -> Self {
        TodoId::Number(n)
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        TodoId::Text(s.to_string())
    }
}

impl From<String> for TodoId {
    fn from(s: String) -> Self {
        TodoId::Text(s)
    }
}

/// A single task record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub is_completed: bool,
}

impl TodoItem {
    pub fn new(id: impl Into<TodoId>, text: impl Into<String>, is_completed: bool) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            is_completed,
        }
    }

    /// Merge the fields present in `patch` into this item.
    ///
    /// Returns `true` if anything changed. The id is never rewritten.
    pub fn apply(&mut self, patch: &TodoPatch) -> bool {
        let mut changed = false;
        if let Some(text) = &patch.text {
            if *text != self.text {
                self.text = text.clone();
                changed = true;
            }
        }
        if let Some(done) = patch.is_completed {
            if done != self.is_completed {
                self.is_completed = done;
                changed = true;
            }
        }
        changed
    }

    /// The body to send when only the completion flag should flip.
    pub fn toggled(&self) -> TodoDraft {
        TodoDraft {
            text: self.text.clone(),
            is_completed: !self.is_completed,
        }
    }
}

/// Request body for create and update: `{ text, isCompleted }`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoDraft {
    pub text: String,
    pub is_completed: bool,
}

impl TodoDraft {
    /// A fresh, not yet completed todo
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_completed: false,
        }
    }

    pub fn with_completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }
}

/// Partial item keyed by id - the payload of `updateTodo`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    pub id: TodoId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

impl TodoPatch {
    pub fn new(id: impl Into<TodoId>) -> Self {
        Self {
            id: id.into(),
            text: None,
            is_completed: None,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = Some(is_completed);
        self
    }
}

impl From<TodoItem> for TodoPatch {
    fn from(item: TodoItem) -> Self {
        Self {
            id: item.id,
            text: Some(item.text),
            is_completed: Some(item.is_completed),
        }
    }
}

/// View-level selector applied to the list for display only
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Every filter, in the order the footer shows them
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Whether `todo` is visible under this filter
    pub fn matches(self, todo: &TodoItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.is_completed,
            Filter::Completed => todo.is_completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// Human label ("All", "Active", "Completed")
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing anything other than `all`, `active` or `completed`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter {0:?} (expected all, active or completed)")]
pub struct ParseFilterError(String);

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            other => Err(ParseFilterError(other.to_string())),
        }
    }
}

/// Application state - the single in-memory list plus the active filter
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodosState {
    pub todos: Vec<TodoItem>,
    pub filter: Filter,
}

impl TodosState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_todos(todos: Vec<TodoItem>) -> Self {
        Self {
            todos,
            filter: Filter::All,
        }
    }

    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|t| &t.id == id)
    }

    pub fn contains(&self, id: &TodoId) -> bool {
        self.get(id).is_some()
    }
}
