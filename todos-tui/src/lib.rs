//! Terminal front-end for the todos client
//!
//! The todo list itself lives in a `todos_core::TodosStore`. This crate adds
//! a second, UI-only store (focus, input buffer, edit buffer, sync status)
//! whose reducer turns key-driven actions into [`Effect`]s. The
//! [`TodosRuntime`] runs those effects against the core's named operations.

pub mod action;
pub mod components;
pub mod effect;
pub mod event;
pub mod reducer;
pub mod runtime;
pub mod state;
pub mod tasks;
pub mod testing;
pub mod ui;

pub use action::UiAction;
pub use effect::Effect;
pub use event::EventKind;
pub use reducer::ui_reducer;
pub use runtime::{EventOutcome, TodosRuntime};
pub use state::{Editing, Focus, UiState};
pub use tasks::{TaskKey, TaskManager};
pub use ui::TodosUi;
