//! In-memory remote store with failure injection

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use todos_core::{RemoteError, RemoteStore, Result, TodoDraft, TodoId, TodoItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Create,
    Update,
    Delete,
}

#[derive(Default)]
pub struct FakeRemote {
    todos: Mutex<Vec<TodoItem>>,
    next_id: Mutex<u64>,
    failing_ops: Mutex<HashSet<Op>>,
    failing_ids: Mutex<HashSet<TodoId>>,
    calls: Mutex<Vec<(Op, Option<TodoId>)>>,
}

impl FakeRemote {
    pub fn with_todos(todos: Vec<TodoItem>) -> Self {
        let next = todos.len() as u64 + 1;
        let remote = Self::default();
        *remote.todos.lock().unwrap() = todos;
        *remote.next_id.lock().unwrap() = next;
        remote
    }

    /// Every call of `op` fails with a 500
    pub fn fail(&self, op: Op) {
        self.failing_ops.lock().unwrap().insert(op);
    }

    /// Updates and deletes addressed to `id` fail with a 500
    pub fn fail_for(&self, id: impl Into<TodoId>) {
        self.failing_ids.lock().unwrap().insert(id.into());
    }

    pub fn stored(&self) -> Vec<TodoItem> {
        self.todos.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<(Op, Option<TodoId>)> {
        self.calls.lock().unwrap().clone()
    }

    fn check(&self, op: Op, id: Option<&TodoId>) -> Result<()> {
        self.calls.lock().unwrap().push((op, id.cloned()));

        let failing_id = id.is_some_and(|id| self.failing_ids.lock().unwrap().contains(id));
        if self.failing_ops.lock().unwrap().contains(&op) || failing_id {
            return Err(RemoteError::Status {
                method: reqwest::Method::GET,
                url: format!("fake://todos/{:?}", op),
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RemoteStore for FakeRemote {
    async fn list(&self) -> Result<Vec<TodoItem>> {
        self.check(Op::List, None)?;
        Ok(self.stored())
    }

    async fn create(&self, draft: &TodoDraft) -> Result<TodoItem> {
        self.check(Op::Create, None)?;
        let mut next = self.next_id.lock().unwrap();
        *next = (*next).max(1);
        let item = TodoItem::new(*next, draft.text.clone(), draft.is_completed);
        *next += 1;
        self.todos.lock().unwrap().push(item.clone());
        Ok(item)
    }

    async fn update(&self, id: &TodoId, fields: &TodoDraft) -> Result<TodoItem> {
        self.check(Op::Update, Some(id))?;
        let mut todos = self.todos.lock().unwrap();
        let todo = todos
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| RemoteError::UnexpectedResponse(format!("no todo {}", id)))?;
        todo.text = fields.text.clone();
        todo.is_completed = fields.is_completed;
        Ok(todo.clone())
    }

    async fn delete(&self, id: &TodoId) -> Result<()> {
        self.check(Op::Delete, Some(id))?;
        self.todos.lock().unwrap().retain(|t| &t.id != id);
        Ok(())
    }
}
