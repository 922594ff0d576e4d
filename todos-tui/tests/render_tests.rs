//! Full-screen render tests using RenderHarness

use todos_core::{Filter, TodoItem, TodosState};
use todos_tui::testing::{key_event, RenderHarness};
use todos_tui::{ui_reducer, Editing, Focus, TodosUi, UiAction, UiState};

fn sample() -> TodosState {
    TodosState::with_todos(vec![
        TodoItem::new(1, "Buy milk", false),
        TodoItem::new(2, "Walk dog", true),
        TodoItem::new(3, "Read book", false),
    ])
}

fn render(todos: &TodosState, ui_state: &UiState) -> String {
    let mut render = RenderHarness::new(72, 16);
    let mut ui = TodosUi::new();
    render.render_to_string_plain(|frame| ui.render(frame, frame.area(), todos, ui_state))
}

#[test]
fn test_render_empty_list() {
    let output = render(&TodosState::new(), &UiState::new());

    assert!(output.contains("todos"));
    assert!(output.contains("What needs to be done?"));
    assert!(!output.contains("items left"));
    assert!(!output.contains("Completed"));
}

#[test]
fn test_render_active_filter() {
    let todos = TodosState {
        filter: Filter::Active,
        ..sample()
    };
    let output = render(&todos, &UiState::new());

    assert!(output.contains("Buy milk"));
    assert!(output.contains("Read book"));
    assert!(!output.contains("Walk dog"));
    assert!(output.contains("2 items left"));
    assert!(output.contains("[Active]"));
}

#[test]
fn test_render_nothing_matches_filter() {
    let todos = TodosState {
        filter: Filter::Completed,
        todos: vec![TodoItem::new(1, "Buy milk", false)],
    };
    let output = render(&todos, &UiState::new());

    assert!(output.contains("Nothing here"));
    assert!(output.contains("1 item left"));
}

#[test]
fn test_render_selection_and_sync_status() {
    let ui_state = UiState {
        focus: Focus::List,
        selected: 2,
        pending: 1,
        status: Some("update failed: boom".into()),
        ..Default::default()
    };
    let output = render(&sample(), &ui_state);

    assert!(output.contains("> [ ] Read book"));
    assert!(output.contains("syncing 1"));
    assert!(output.contains("update failed: boom"));
}

#[test]
fn test_render_editing_row() {
    let todos = sample();
    let ui_state = UiState {
        focus: Focus::List,
        editing: Some(Editing {
            text: "Buy oat milk".into(),
            ..Editing::of(&todos.todos[0])
        }),
        ..Default::default()
    };
    let output = render(&todos, &ui_state);

    assert!(output.contains("Buy oat milk"));
    assert!(output.contains("esc cancel"));
}

#[test]
fn test_typing_flows_through_reducer() {
    let todos = TodosState::new();
    let mut ui = TodosUi::new();
    let mut state = UiState::new();

    for key in ["h", "i", "enter"] {
        let outcome = ui.map_event(&key_event(key), &todos, &state);
        for action in outcome.actions {
            let result = ui_reducer(&mut state, action);
            if key == "enter" {
                assert_eq!(result.effects.len(), 1);
            }
        }
    }

    assert!(state.input.is_empty());
    assert_eq!(state.pending, 1);

    let outcome = ui.map_event(&key_event("tab"), &todos, &state);
    assert_eq!(outcome.actions, vec![UiAction::FocusNext]);
}
