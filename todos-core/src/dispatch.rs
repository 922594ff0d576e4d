//! Dispatch handle - the write side of the shared todo state

use tokio::sync::mpsc;

use crate::action::{Action, TodosAction};

/// Cheap, clonable handle that queues actions for the todo store
///
/// Actions are applied by [`TodosStore`](crate::TodosStore) in the order they
/// are sent. Sending never blocks; if the store is gone the action is dropped.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<TodosAction>,
}

impl Dispatcher {
    pub fn new(tx: mpsc::UnboundedSender<TodosAction>) -> Self {
        Self { tx }
    }

    /// A dispatcher plus the receiving end, for stores and tests
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<TodosAction>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    /// Queue an action for the reducer
    pub fn dispatch(&self, action: TodosAction) {
        if self.tx.send(action).is_err() {
            tracing::debug!("Todo store dropped, action discarded");
        }
    }

    /// Whether the receiving store is gone
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Drain everything queued on `rx` without waiting
pub fn drain<A: Action>(rx: &mut mpsc::UnboundedReceiver<A>) -> Vec<A> {
    let mut actions = Vec::new();
    while let Ok(action) = rx.try_recv() {
        actions.push(action);
    }
    actions
}
