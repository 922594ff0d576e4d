//! State management core for the todos client
//!
//! This crate keeps a single in-memory todo list synchronized with a remote
//! collection and projects it into a filtered view, following a
//! Redux/Elm-inspired architecture.
//!
//! # Core Concepts
//!
//! - **Action**: [`TodosAction`] records that describe state changes
//! - **Reducer**: [`reducer`] applies an action to [`TodosState`]
//! - **Store**: [`Store`] / [`EffectStore`] hold state and run reducers
//! - **Operations**: async functions that call the [`RemoteStore`] and
//!   dispatch the confirmed result
//! - **Views**: pure projections ([`view`]) for rendering
//! - **Context**: [`TodosStore`] owns the session state and hands out
//!   [`TodosContext`]s to consumers
//!
//! # Basic Example
//!
//! ```
//! use todos_core::{reducer, view, Filter, TodoItem, TodosAction, TodosState};
//!
//! let mut state = TodosState::new();
//! reducer(&mut state, TodosAction::AddTodo(TodoItem::new(1, "test", false)));
//! reducer(&mut state, TodosAction::AddTodo(TodoItem::new(2, "done", true)));
//! reducer(&mut state, TodosAction::ChangeFilter(Filter::Active));
//!
//! assert_eq!(view::remaining_count(&state), 1);
//! assert_eq!(view::visible_todos(&state).len(), 1);
//! ```
//!
//! # Async Pattern
//!
//! Remote work never happens in the reducer. An operation awaits the remote
//! store first and only then dispatches:
//!
//! 1. `create(draft)` POSTs the draft
//! 2. the store answers with the item and its id
//! 3. `addTodo(item)` is dispatched and applied by the reducer
//!
//! A failed call returns the error and dispatches nothing.

pub mod action;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod effect;
pub mod error;
pub mod model;
pub mod operations;
pub mod reducer;
pub mod remote;
pub mod store;
pub mod view;

pub use action::{Action, TodosAction};
pub use config::{Config, API_URL_ENV};
pub use context::{StateHandle, TodoActions, TodosContext, TodosStore};
pub use dispatch::Dispatcher;
pub use effect::{DispatchResult, EffectReducer, EffectStore};
pub use error::{ConfigError, RemoteError, Result};
pub use model::{Filter, ParseFilterError, TodoDraft, TodoId, TodoItem, TodoPatch, TodosState};
pub use reducer::reducer;
pub use remote::{HttpRemote, RemoteStore};
pub use store::{LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{Action, TodosAction};
    pub use crate::context::{StateHandle, TodoActions, TodosContext, TodosStore};
    pub use crate::dispatch::Dispatcher;
    pub use crate::effect::{DispatchResult, EffectStore};
    pub use crate::model::{Filter, TodoDraft, TodoId, TodoItem, TodoPatch, TodosState};
    pub use crate::remote::RemoteStore;
    pub use crate::store::{LoggingMiddleware, Middleware, Store};
    pub use crate::view;
}
