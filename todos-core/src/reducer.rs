//! Reducer - the only code path that changes `TodosState`
//!
//! `fn(&mut TodosState, TodosAction) -> bool`, returning `true` when the state
//! changed. The store owns the state exclusively, so readers only ever see
//! the published snapshot from before or after a call.

use std::collections::HashSet;

use crate::action::TodosAction;
use crate::model::TodosState;

/// Apply one action to the todo state
///
/// # Returns
/// `true` if the state changed and views should re-render
pub fn reducer(state: &mut TodosState, action: TodosAction) -> bool {
    match action {
        TodosAction::GetTodos(mut todos) => {
            // First occurrence of a repeated id wins
            let mut seen = HashSet::new();
            todos.retain(|t| seen.insert(t.id.clone()));
            if state.todos == todos {
                return false;
            }
            state.todos = todos;
            true
        }

        TodosAction::AddTodo(item) => {
            // Ids are unique; a repeated id replaces the existing entry in place
            match state.todos.iter_mut().find(|t| t.id == item.id) {
                Some(existing) if *existing == item => false,
                Some(existing) => {
                    *existing = item;
                    true
                }
                None => {
                    state.todos.push(item);
                    true
                }
            }
        }

        TodosAction::ToggleAll(flag) => {
            let mut changed = false;
            for todo in state.todos.iter_mut().filter(|t| t.is_completed != flag) {
                todo.is_completed = flag;
                changed = true;
            }
            changed
        }

        TodosAction::UpdateTodo(patch) => state
            .todos
            .iter_mut()
            .find(|t| t.id == patch.id)
            .map(|todo| todo.apply(&patch))
            .unwrap_or(false),

        TodosAction::RemoveTodo(id) => {
            let before = state.todos.len();
            state.todos.retain(|t| t.id != id);
            state.todos.len() != before
        }

        TodosAction::ChangeFilter(filter) => {
            if state.filter == filter {
                return false;
            }
            state.filter = filter;
            true
        }

        TodosAction::Unknown => false,
    }
}
