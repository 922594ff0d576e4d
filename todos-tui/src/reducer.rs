//! UI reducer: `fn(&mut UiState, UiAction) -> DispatchResult<Effect>`
//!
//! Every remote effect bumps `pending`; the matching `TaskDidComplete` /
//! `TaskDidFail` brings it back down.

use todos_core::{DispatchResult, TodoDraft};

use crate::action::UiAction;
use crate::effect::Effect;
use crate::state::{Editing, Focus, UiState};

fn remote(state: &mut UiState, effect: Effect) -> DispatchResult<Effect> {
    state.pending += 1;
    DispatchResult::changed_with(effect)
}

fn set<T: PartialEq>(slot: &mut T, value: T) -> DispatchResult<Effect> {
    if *slot == value {
        return DispatchResult::unchanged();
    }
    *slot = value;
    DispatchResult::changed()
}

pub fn ui_reducer(state: &mut UiState, action: UiAction) -> DispatchResult<Effect> {
    match action {
        // ===== Header input =====
        UiAction::InputChange(text) => set(&mut state.input, text),

        UiAction::InputSubmit(text) => {
            let text = text.trim();
            if text.is_empty() {
                return DispatchResult::unchanged();
            }
            let draft = TodoDraft::new(text);
            state.input.clear();
            remote(state, Effect::AddTodo(draft))
        }

        // ===== List =====
        UiAction::Select(index) => set(&mut state.selected, index),

        UiAction::TodoToggle(todo) => remote(
            state,
            Effect::UpdateTodo {
                fields: todo.toggled(),
                id: todo.id,
            },
        ),

        UiAction::TodoRemove(id) => {
            if state.is_editing(&id) {
                state.editing = None;
            }
            remote(state, Effect::RemoveTodo(id))
        }

        UiAction::ToggleAll(flag) => remote(state, Effect::ToggleAll(flag)),

        // ===== Editing =====
        UiAction::EditStart(todo) => {
            state.editing = Some(Editing::of(&todo));
            state.focus = Focus::List;
            DispatchResult::changed()
        }

        UiAction::EditChange(text) => match state.editing.as_mut() {
            Some(editing) => set(&mut editing.text, text),
            None => DispatchResult::unchanged(),
        },

        UiAction::EditSubmit(text) => {
            let Some(editing) = state.editing.take() else {
                return DispatchResult::unchanged();
            };
            match editing.submission(&text) {
                Some(fields) => remote(
                    state,
                    Effect::UpdateTodo {
                        id: editing.id,
                        fields,
                    },
                ),
                // Blank text cancels the edit
                None => DispatchResult::changed(),
            }
        }

        UiAction::EditCancel => {
            if state.editing.take().is_some() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Footer =====
        UiAction::ChangeFilter(filter) => {
            state.selected = 0;
            DispatchResult::changed_with(Effect::ChangeFilter(filter))
        }

        // ===== Global =====
        UiAction::FocusNext => {
            state.focus = state.focus.toggle();
            state.editing = None;
            DispatchResult::changed()
        }

        UiAction::Refresh => remote(state, Effect::Refresh),

        // Quit is handled by the runtime loop
        UiAction::Quit => DispatchResult::unchanged(),

        // ===== Task results =====
        UiAction::TaskDidComplete(_) => {
            state.pending = state.pending.saturating_sub(1);
            state.status = None;
            DispatchResult::changed()
        }

        UiAction::TaskDidFail { op, error } => {
            state.pending = state.pending.saturating_sub(1);
            state.status = Some(format!("{op} failed: {error}"));
            DispatchResult::changed()
        }
    }
}
