//! Action dispatch layer - bridges user intent to the remote store and back
//!
//! Every remote operation follows the same order:
//! 1. call the remote store
//! 2. await the result
//! 3. on success, dispatch the matching action with the remote response
//!
//! Errors are returned to the caller untouched and nothing is dispatched, so
//! local state never holds a change the store did not confirm. This is the
//! only module that performs remote I/O.

use futures::future::try_join_all;

use crate::action::TodosAction;
use crate::dispatch::Dispatcher;
use crate::error::{RemoteError, Result};
use crate::model::{Filter, TodoDraft, TodoId, TodoItem, TodoPatch};
use crate::remote::RemoteStore;

/// GET the collection and replace local state with it
pub async fn fetch_all<R>(remote: &R, dispatcher: &Dispatcher) -> Result<()>
where
    R: RemoteStore + ?Sized,
{
    let todos = remote.list().await?;
    tracing::debug!(count = todos.len(), "Fetched todos");
    dispatcher.dispatch(TodosAction::GetTodos(todos));
    Ok(())
}

/// POST a draft and append the stored item (with its server-assigned id)
pub async fn create<R>(remote: &R, dispatcher: &Dispatcher, draft: TodoDraft) -> Result<()>
where
    R: RemoteStore + ?Sized,
{
    let item = remote.create(&draft).await?;
    tracing::debug!(id = %item.id, "Created todo");
    dispatcher.dispatch(TodosAction::AddTodo(item));
    Ok(())
}

/// PUT new fields and merge the server's representation into local state
///
/// The response is the source of truth for the merged fields. A response for
/// a different id is rejected as [`RemoteError::UnexpectedResponse`].
pub async fn update<R>(
    remote: &R,
    dispatcher: &Dispatcher,
    id: &TodoId,
    fields: TodoDraft,
) -> Result<()>
where
    R: RemoteStore + ?Sized,
{
    let item = remote.update(id, &fields).await?;
    if &item.id != id {
        return Err(RemoteError::UnexpectedResponse(format!(
            "updated todo {} but the store answered with todo {}",
            id, item.id
        )));
    }
    tracing::debug!(%id, "Updated todo");
    dispatcher.dispatch(TodosAction::UpdateTodo(TodoPatch::from(item)));
    Ok(())
}

/// DELETE an item, then drop it locally
pub async fn remove<R>(remote: &R, dispatcher: &Dispatcher, id: &TodoId) -> Result<()>
where
    R: RemoteStore + ?Sized,
{
    remote.delete(id).await?;
    tracing::debug!(%id, "Removed todo");
    dispatcher.dispatch(TodosAction::RemoveTodo(id.clone()));
    Ok(())
}

/// Set every todo's completion flag, all or nothing
///
/// One PUT per todo is issued concurrently. `toggleAll` is dispatched only
/// after every request succeeded; the first failure is returned and no local
/// change is made, even for the todos whose request went through.
pub async fn toggle_all_remote<R>(
    remote: &R,
    dispatcher: &Dispatcher,
    flag: bool,
    todos: &[TodoItem],
) -> Result<()>
where
    R: RemoteStore + ?Sized,
{
    let requests = todos.iter().map(|todo| {
        let fields = TodoDraft::new(todo.text.clone()).with_completed(flag);
        async move { remote.update(&todo.id, &fields).await }
    });
    try_join_all(requests).await?;

    tracing::debug!(count = todos.len(), flag, "Toggled all todos");
    dispatcher.dispatch(TodosAction::ToggleAll(flag));
    Ok(())
}

/// Select a view filter. Purely local, no remote call.
pub fn set_filter(dispatcher: &Dispatcher, filter: Filter) {
    dispatcher.dispatch(TodosAction::ChangeFilter(filter));
}
