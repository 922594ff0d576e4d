//! Task manager for remote calls
//!
//! Each effect that talks to the remote store runs as its own tokio task and
//! reports back with a single action over the UI channel. Tasks are never
//! replaced or timed out while the app runs; whatever is still in flight is
//! aborted on shutdown.
//!
//! ```ignore
//! let (action_tx, mut action_rx) = tokio::sync::mpsc::unbounded_channel();
//! let mut tasks = TaskManager::new(action_tx);
//!
//! tasks.spawn("refresh", async move {
//!     match actions.get_todos().await {
//!         Ok(()) => UiAction::TaskDidComplete("refresh"),
//!         Err(e) => UiAction::TaskDidFail { op: "refresh", error: e.to_string() },
//!     }
//! });
//!
//! tasks.cancel_all();
//! ```

use std::collections::HashMap;
use std::fmt;
use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use todos_core::Action;

/// Identifies one spawned task: the operation name plus a sequence number
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TaskKey {
    op: &'static str,
    seq: u64,
}

impl TaskKey {
    pub fn op(&self) -> &'static str {
        self.op
    }
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.op, self.seq)
    }
}

pub struct TaskManager<A> {
    tasks: HashMap<TaskKey, AbortHandle>,
    next_seq: u64,
    action_tx: mpsc::UnboundedSender<A>,
}

impl<A> TaskManager<A>
where
    A: Action,
{
    /// Finished tasks send their action into `action_tx`
    pub fn new(action_tx: mpsc::UnboundedSender<A>) -> Self {
        Self {
            tasks: HashMap::new(),
            next_seq: 0,
            action_tx,
        }
    }

    /// Spawn a task; the action it resolves to is sent to the action channel.
    /// A cancelled task sends nothing.
    pub fn spawn<F>(&mut self, op: &'static str, future: F) -> TaskKey
    where
        F: Future<Output = A> + Send + 'static,
    {
        self.prune();

        let key = TaskKey {
            op,
            seq: self.next_seq,
        };
        self.next_seq += 1;

        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            let action = future.await;
            let _ = tx.send(action);
        });
        tracing::debug!(task = %key, "Spawned task");

        self.tasks.insert(key.clone(), handle.abort_handle());
        key
    }

    /// Cancel a task by key. Unknown keys are ignored.
    pub fn cancel(&mut self, key: &TaskKey) {
        if let Some(handle) = self.tasks.remove(key) {
            handle.abort();
        }
    }

    /// Cancel all running tasks
    pub fn cancel_all(&mut self) {
        for (key, handle) in self.tasks.drain() {
            if !handle.is_finished() {
                tracing::debug!(task = %key, "Aborting task");
            }
            handle.abort();
        }
    }

    pub fn is_running(&self, key: &TaskKey) -> bool {
        self.tasks.get(key).is_some_and(|h| !h.is_finished())
    }

    /// Number of tasks still running
    pub fn len(&self) -> usize {
        self.tasks.values().filter(|h| !h.is_finished()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn prune(&mut self) {
        self.tasks.retain(|_, handle| !handle.is_finished());
    }
}

impl<A> Drop for TaskManager<A> {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}
