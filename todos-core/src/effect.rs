//! Stores whose reducer also returns effects
//!
//! An effect is a value naming work for the caller to do after the reducer
//! returns, typically a remote call. The reducer itself stays synchronous:
//! ```ignore
//! fn reducer(state: &mut S, action: A) -> DispatchResult<E>
//! ```
//!
//! The todos front-end keeps its UI-local state in an [`EffectStore`]: a
//! submitted draft clears the input (state change) and asks for a remote
//! create (effect), which the runtime then runs as an async task.

use std::marker::PhantomData;

use crate::action::Action;
use crate::store::{Middleware, NoopMiddleware};

/// What one dispatch did to the state, and what it asks the caller to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult<E> {
    pub changed: bool,
    /// In the order the reducer emitted them
    pub effects: Vec<E>,
}

impl<E> Default for DispatchResult<E> {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl<E> DispatchResult<E> {
    /// Nothing happened
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

/// Reducer for an [`EffectStore`]
pub type EffectReducer<S, A, E> = fn(&mut S, A) -> DispatchResult<E>;

/// [`Store`](crate::Store) counterpart for an [`EffectReducer`]
///
/// Effects are handed back from [`dispatch`](Self::dispatch); middleware only
/// sees the action and the changed flag.
pub struct EffectStore<S, A, E, M = NoopMiddleware>
where
    A: Action,
    M: Middleware<A>,
{
    state: S,
    reducer: EffectReducer<S, A, E>,
    middleware: M,
    _marker: PhantomData<(A, E)>,
}

impl<S, A, E> EffectStore<S, A, E, NoopMiddleware>
where
    A: Action,
{
    pub fn new(state: S, reducer: EffectReducer<S, A, E>) -> Self {
        Self::with_middleware(state, reducer, NoopMiddleware)
    }
}

impl<S, A, E, M> EffectStore<S, A, E, M>
where
    A: Action,
    M: Middleware<A>,
{
    pub fn with_middleware(state: S, reducer: EffectReducer<S, A, E>, middleware: M) -> Self {
        Self {
            state,
            reducer,
            middleware,
            _marker: PhantomData,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Run `action` through the middleware and the reducer
    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        self.middleware.before(&action);
        let result = (self.reducer)(&mut self.state, action.clone());
        self.middleware.after(&action, result.changed);
        result
    }
}
