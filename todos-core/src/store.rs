//! Centralized state store with reducer pattern

use std::marker::PhantomData;

use crate::Action;

/// Applies an action in place; `true` means the state is now different
pub type Reducer<S, A> = fn(&mut S, A) -> bool;

/// Owns a state value and lets it change only through the reducer
///
/// Middleware is called around every reducer run.
///
/// # Example
/// ```
/// use todos_core::{reducer, Store, TodoItem, TodosAction, TodosState};
///
/// let mut store = Store::new(TodosState::new(), reducer);
/// store.dispatch(TodosAction::AddTodo(TodoItem::new(1, "test", false)));
/// assert_eq!(store.state().todos.len(), 1);
/// ```
pub struct Store<S, A: Action, M: Middleware<A> = NoopMiddleware> {
    state: S,
    reducer: Reducer<S, A>,
    middleware: M,
    _marker: PhantomData<A>,
}

impl<S, A: Action> Store<S, A, NoopMiddleware> {
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        Self::with_middleware(state, reducer, NoopMiddleware)
    }
}

impl<S, A: Action, M: Middleware<A>> Store<S, A, M> {
    /// Create a new store that runs `middleware` around every dispatch
    pub fn with_middleware(state: S, reducer: Reducer<S, A>, middleware: M) -> Self {
        Self {
            state,
            reducer,
            middleware,
            _marker: PhantomData,
        }
    }

    /// Returns whatever the reducer returned
    pub fn dispatch(&mut self, action: A) -> bool {
        self.middleware.before(&action);
        let changed = (self.reducer)(&mut self.state, action.clone());
        self.middleware.after(&action, changed);
        changed
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn middleware(&self) -> &M {
        &self.middleware
    }
}

/// Hooks around each reducer run
pub trait Middleware<A: Action> {
    fn before(&mut self, action: &A);

    /// `state_changed` is the reducer's return value
    fn after(&mut self, action: &A, state_changed: bool);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<A: Action> Middleware<A> for NoopMiddleware {
    fn before(&mut self, _action: &A) {}
    fn after(&mut self, _action: &A, _state_changed: bool) {}
}

/// Middleware that logs actions through `tracing`
#[derive(Debug, Clone, Default)]
pub struct LoggingMiddleware {
    pub log_before: bool,
    pub log_after: bool,
}

impl LoggingMiddleware {
    /// Logs once per action, after the reducer
    pub fn new() -> Self {
        Self {
            log_before: false,
            log_after: true,
        }
    }

    pub fn verbose() -> Self {
        Self {
            log_before: true,
            log_after: true,
        }
    }
}

impl<A: Action> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        if self.log_before {
            tracing::debug!(action = %action.name(), "Dispatching action");
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        if self.log_after {
            tracing::debug!(
                action = %action.name(),
                summary = %action.summary(),
                state_changed = state_changed,
                "Action processed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Filter, TodoItem, TodosState};
    use crate::reducer::reducer;
    use crate::TodosAction;

    #[test]
    fn test_store_dispatch() {
        let mut store = Store::new(TodosState::new(), reducer);

        assert!(store.dispatch(TodosAction::AddTodo(TodoItem::new(1, "a", false))));
        assert!(store.dispatch(TodosAction::AddTodo(TodoItem::new(2, "b", false))));
        assert_eq!(store.state().todos.len(), 2);

        assert!(store.dispatch(TodosAction::RemoveTodo(1.into())));
        assert_eq!(store.state().todos.len(), 1);
    }

    #[test]
    fn test_store_noop() {
        let mut store = Store::new(TodosState::new(), reducer);

        assert!(!store.dispatch(TodosAction::Unknown));
        assert!(!store.dispatch(TodosAction::ChangeFilter(Filter::All)));
        assert_eq!(store.state(), &TodosState::new());
    }

    #[derive(Default)]
    struct CountingMiddleware {
        before_count: usize,
        after_count: usize,
        changed_count: usize,
    }

    impl<A: Action> Middleware<A> for CountingMiddleware {
        fn before(&mut self, _action: &A) {
            self.before_count += 1;
        }

        fn after(&mut self, _action: &A, state_changed: bool) {
            self.after_count += 1;
            if state_changed {
                self.changed_count += 1;
            }
        }
    }

    #[test]
    fn test_store_with_middleware() {
        let mut store = Store::with_middleware(
            TodosState::new(),
            reducer,
            CountingMiddleware::default(),
        );

        store.dispatch(TodosAction::AddTodo(TodoItem::new(1, "a", false)));
        store.dispatch(TodosAction::Unknown);

        assert_eq!(store.middleware().before_count, 2);
        assert_eq!(store.middleware().after_count, 2);
        assert_eq!(store.middleware().changed_count, 1);
        assert_eq!(store.state().todos.len(), 1);
    }

    #[test]
    fn test_logging_middleware_passes_through() {
        let mut store = Store::with_middleware(
            TodosState::new(),
            reducer,
            LoggingMiddleware::verbose(),
        );

        // Nothing to toggle on an empty list
        assert!(!store.dispatch(TodosAction::ToggleAll(true)));
        assert!(store.dispatch(TodosAction::ChangeFilter(Filter::Completed)));
        assert_eq!(store.state().filter, Filter::Completed);
    }
}
