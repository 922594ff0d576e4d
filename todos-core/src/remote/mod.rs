//! Remote store client
//!
//! The remote todo collection is an external collaborator reached over a
//! request/response protocol. [`RemoteStore`] is the seam: the action layer
//! only talks to this trait, [`HttpRemote`] speaks HTTP+JSON to a real
//! server, and tests plug in fakes.

mod http;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{TodoDraft, TodoId, TodoItem};

pub use http::HttpRemote;

/// CRUD access to the remote todo collection
///
/// | Operation | Method | Path          | Body                  |
/// |-----------|--------|---------------|-----------------------|
/// | list      | GET    | `/todos`      | -                     |
/// | create    | POST   | `/todos`      | `{text, isCompleted}` |
/// | update    | PUT    | `/todos/{id}` | `{text, isCompleted}` |
/// | delete    | DELETE | `/todos/{id}` | -                     |
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetch the full collection, in store order
    async fn list(&self) -> Result<Vec<TodoItem>>;

    /// Create an item; the store assigns the id
    async fn create(&self, draft: &TodoDraft) -> Result<TodoItem>;

    /// Replace an item's fields, returning the stored representation
    async fn update(&self, id: &TodoId, fields: &TodoDraft) -> Result<TodoItem>;

    /// Delete an item. The response body is ignored.
    async fn delete(&self, id: &TodoId) -> Result<()>;
}
