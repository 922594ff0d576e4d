//! Shared state distribution
//!
//! [`TodosStore`] owns the one `TodosState` of a session and is its only
//! writer. Everything else gets a [`TodosContext`]: a read handle on the
//! latest published snapshot, the [`Dispatcher`] escape hatch, and the
//! [`TodoActions`] bundle of named operations.
//!
//! ```no_run
//! use std::sync::Arc;
//! use todos_core::{Config, HttpRemote, TodoDraft, TodosStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let remote = HttpRemote::new(Config::new("http://localhost:3000")?);
//! let mut store = TodosStore::new(Arc::new(remote));
//! let ctx = store.context();
//!
//! ctx.actions.get_todos().await?;
//! ctx.actions.add_todo(TodoDraft::new("Buy milk")).await?;
//! store.apply_pending();
//!
//! println!("{} todos", ctx.state.borrow().todos.len());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::action::TodosAction;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::model::{Filter, TodoDraft, TodoId, TodosState};
use crate::operations;
use crate::reducer::reducer;
use crate::remote::RemoteStore;
use crate::store::{LoggingMiddleware, Store};

/// The single state container of a session
///
/// Actions sent through any [`Dispatcher`] clone are queued and applied here,
/// in arrival order. After each change the new state is published to every
/// [`StateHandle`].
pub struct TodosStore {
    store: Store<TodosState, TodosAction, LoggingMiddleware>,
    action_rx: mpsc::UnboundedReceiver<TodosAction>,
    state_tx: watch::Sender<TodosState>,
    context: TodosContext,
}

impl TodosStore {
    /// Create the session state (`todos = []`, `filter = all`)
    pub fn new(remote: Arc<dyn RemoteStore>) -> Self {
        Self::with_state(TodosState::new(), remote)
    }

    /// Create the container around an existing state
    pub fn with_state(state: TodosState, remote: Arc<dyn RemoteStore>) -> Self {
        let (dispatcher, action_rx) = Dispatcher::channel();
        let (state_tx, state_rx) = watch::channel(state.clone());
        let state_handle = StateHandle { rx: state_rx };

        let context = TodosContext {
            actions: TodoActions {
                remote,
                dispatcher: dispatcher.clone(),
                state: state_handle.clone(),
            },
            state: state_handle,
            dispatcher,
        };

        Self {
            store: Store::with_middleware(state, reducer, LoggingMiddleware::new()),
            action_rx,
            state_tx,
            context,
        }
    }

    /// A context for a consumer. All contexts share this store.
    pub fn context(&self) -> TodosContext {
        self.context.clone()
    }

    /// Current state, as the single writer sees it
    pub fn state(&self) -> &TodosState {
        self.store.state()
    }

    /// Apply an action immediately and publish the result
    ///
    /// Returns `true` if the state changed.
    pub fn dispatch(&mut self, action: TodosAction) -> bool {
        let changed = self.store.dispatch(action);
        if changed {
            self.state_tx.send_replace(self.store.state().clone());
        }
        changed
    }

    /// Wait for the next queued action
    ///
    /// Never returns `None` while the store is alive, since it holds a
    /// dispatcher of its own.
    pub async fn recv(&mut self) -> Option<TodosAction> {
        self.action_rx.recv().await
    }

    /// Apply every queued action. Returns `true` if anything changed.
    pub fn apply_pending(&mut self) -> bool {
        let mut changed = false;
        while let Ok(action) = self.action_rx.try_recv() {
            changed |= self.dispatch(action);
        }
        changed
    }
}

/// Read access to the latest published state
#[derive(Debug, Clone)]
pub struct StateHandle {
    rx: watch::Receiver<TodosState>,
}

impl StateHandle {
    /// Borrow the latest snapshot. Keep the guard short-lived.
    pub fn borrow(&self) -> watch::Ref<'_, TodosState> {
        self.rx.borrow()
    }

    /// Owned copy of the latest snapshot
    pub fn snapshot(&self) -> TodosState {
        self.rx.borrow().clone()
    }

    /// Whether a snapshot was published that this handle has not waited on yet
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Wait until a newer snapshot is published
    ///
    /// Returns `false` once the store is dropped.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}

/// Named operations closing over the dispatcher, so consumers never build
/// action records themselves
#[derive(Clone)]
pub struct TodoActions {
    remote: Arc<dyn RemoteStore>,
    dispatcher: Dispatcher,
    state: StateHandle,
}

impl std::fmt::Debug for TodoActions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoActions")
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}

impl TodoActions {
    pub async fn get_todos(&self) -> Result<()> {
        operations::fetch_all(self.remote.as_ref(), &self.dispatcher).await
    }

    pub async fn add_todo(&self, draft: TodoDraft) -> Result<()> {
        operations::create(self.remote.as_ref(), &self.dispatcher, draft).await
    }

    pub async fn update_todo(&self, id: TodoId, fields: TodoDraft) -> Result<()> {
        operations::update(self.remote.as_ref(), &self.dispatcher, &id, fields).await
    }

    pub async fn remove_todo(&self, id: TodoId) -> Result<()> {
        operations::remove(self.remote.as_ref(), &self.dispatcher, &id).await
    }

    /// Toggle every todo in the current snapshot
    pub async fn toggle_all(&self, flag: bool) -> Result<()> {
        let todos = self.state.snapshot().todos;
        operations::toggle_all_remote(self.remote.as_ref(), &self.dispatcher, flag, &todos).await
    }

    pub fn change_filter(&self, filter: Filter) {
        operations::set_filter(&self.dispatcher, filter);
    }
}

/// What every consumer receives: state, dispatch escape hatch, action bundle
#[derive(Debug, Clone)]
pub struct TodosContext {
    pub state: StateHandle,
    pub dispatcher: Dispatcher,
    pub actions: TodoActions,
}
