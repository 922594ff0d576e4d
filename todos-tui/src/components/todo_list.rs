//! Main list: toggle-all row plus one row per visible todo

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use todos_core::{view, TodoId, TodoItem, TodosState};

use super::{Component, TextInput, TextInputProps};
use crate::action::UiAction;
use crate::event::EventKind;
use crate::state::Editing;

pub const TOGGLE_ALL_LABEL: &str = "Mark all as complete";

pub struct TodoListProps<'a> {
    pub todos: &'a TodosState,
    pub selected: usize,
    pub editing: Option<&'a Editing>,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct TodoList {
    edit_input: TextInput,
    /// Todo the edit cursor was placed for
    edit_target: Option<TodoId>,
}

fn checkbox(done: bool) -> &'static str {
    if done {
        "[x] "
    } else {
        "[ ] "
    }
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start each edit with the cursor after the prefilled text
    fn sync_edit(&mut self, editing: Option<&Editing>) {
        let target = editing.map(|e| e.id.clone());
        if target != self.edit_target {
            if let Some(editing) = editing {
                self.edit_input.move_to_end(&editing.text);
            }
            self.edit_target = target;
        }
    }

    fn edit_props(editing: &Editing, is_focused: bool) -> TextInputProps<'_, UiAction> {
        TextInputProps {
            value: &editing.text,
            placeholder: "",
            is_focused,
            title: None,
            on_change: UiAction::EditChange,
            on_submit: UiAction::EditSubmit,
        }
    }

    fn row(todo: &TodoItem, is_selected: bool) -> Line<'_> {
        let mut text_style = Style::default();
        if todo.is_completed {
            text_style = text_style
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT);
        }
        let marker = if is_selected { "> " } else { "  " };
        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::raw(checkbox(todo.is_completed)),
            Span::styled(todo.text.as_str(), text_style),
        ])
    }
}

impl Component<UiAction> for TodoList {
    type Props<'a> = TodoListProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = UiAction> {
        let EventKind::Key(key) = event else {
            return vec![];
        };
        if !props.is_focused {
            return vec![];
        }

        self.sync_edit(props.editing);
        if let Some(editing) = props.editing {
            if key.code == KeyCode::Esc {
                return vec![UiAction::EditCancel];
            }
            let edit_props = Self::edit_props(editing, true);
            return self
                .edit_input
                .handle_event(event, edit_props)
                .into_iter()
                .collect::<Vec<_>>();
        }

        let visible = view::visible_todos(props.todos);
        let Some(selected) = props.selected_in(visible.len()) else {
            return match key.code {
                KeyCode::Char('a') if !view::is_hidden(props.todos) => {
                    vec![UiAction::ToggleAll(!view::all_completed(props.todos))]
                }
                _ => vec![],
            };
        };
        let todo = visible[selected];

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                vec![UiAction::Select((selected + 1).min(visible.len() - 1))]
            }
            KeyCode::Up | KeyCode::Char('k') => vec![UiAction::Select(selected.saturating_sub(1))],
            KeyCode::Char(' ') | KeyCode::Char('x') => vec![UiAction::TodoToggle(todo.clone())],
            KeyCode::Char('d') | KeyCode::Delete => vec![UiAction::TodoRemove(todo.id.clone())],
            KeyCode::Enter | KeyCode::Char('e') => vec![UiAction::EditStart(todo.clone())],
            KeyCode::Char('a') => vec![UiAction::ToggleAll(!view::all_completed(props.todos))],
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.sync_edit(props.editing);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if props.is_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 {
            return;
        }

        let all_done = view::all_completed(props.todos);
        let toggle_row = Line::from(vec![
            Span::raw("  "),
            Span::raw(checkbox(all_done)),
            Span::raw(TOGGLE_ALL_LABEL).italic(),
        ])
        .fg(Color::Gray);
        frame.render_widget(Paragraph::new(toggle_row), Rect { height: 1, ..inner });

        let rows = Rect {
            y: inner.y + 1,
            height: inner.height - 1,
            ..inner
        };
        let visible = view::visible_todos(props.todos);
        if visible.is_empty() {
            let empty = Line::from("  Nothing here".fg(Color::DarkGray));
            frame.render_widget(Paragraph::new(empty), rows);
            return;
        }

        let selected = props.selected_in(visible.len()).unwrap_or(0);
        let offset = selected.saturating_sub((rows.height as usize).saturating_sub(1));

        for (slot, (index, todo)) in visible
            .iter()
            .enumerate()
            .skip(offset)
            .take(rows.height as usize)
            .enumerate()
        {
            let row_area = Rect {
                y: rows.y + slot as u16,
                height: 1,
                ..rows
            };
            let is_selected = props.is_focused && index == selected;

            match props.editing.filter(|e| e.id == todo.id) {
                Some(editing) => {
                    let prefix = format!("> {}", checkbox(todo.is_completed));
                    let width = prefix.len() as u16;
                    frame.render_widget(Paragraph::new(prefix), Rect { width, ..row_area });
                    let input_area = Rect {
                        x: row_area.x + width,
                        width: row_area.width.saturating_sub(width),
                        ..row_area
                    };
                    self.edit_input.render(
                        frame,
                        input_area,
                        Self::edit_props(editing, props.is_focused),
                    );
                }
                None => {
                    let mut line = Self::row(todo, is_selected);
                    if is_selected {
                        line = line.bg(Color::Rgb(40, 40, 60));
                    }
                    frame.render_widget(Paragraph::new(line), row_area);
                }
            }
        }
    }
}

impl TodoListProps<'_> {
    fn selected_in(&self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.selected.min(len - 1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{collect, key, ActionAssertions, RenderHarness};
    use todos_core::{Filter, TodoItem};

    fn sample() -> TodosState {
        TodosState::with_todos(vec![
            TodoItem::new(1, "Buy milk", false),
            TodoItem::new(2, "Walk dog", true),
            TodoItem::new(3, "Write code", false),
        ])
    }

    fn press(list: &mut TodoList, props: TodoListProps<'_>, k: &str) -> Vec<UiAction> {
        collect(list.handle_event(&EventKind::Key(key(k)), props))
    }

    fn props(state: &TodosState, selected: usize) -> TodoListProps<'_> {
        TodoListProps {
            todos: state,
            selected,
            editing: None,
            is_focused: true,
        }
    }

    #[test]
    fn test_navigation_clamps() {
        let state = sample();
        let mut list = TodoList::new();

        press(&mut list, props(&state, 0), "j").assert_first(UiAction::Select(1));
        press(&mut list, props(&state, 2), "down").assert_first(UiAction::Select(2));
        press(&mut list, props(&state, 0), "k").assert_first(UiAction::Select(0));
        // Past the end after a removal
        press(&mut list, props(&state, 9), "up").assert_first(UiAction::Select(1));
    }

    #[test]
    fn test_row_actions_use_visible_list() {
        let mut state = sample();
        state.filter = Filter::Active;
        let mut list = TodoList::new();

        press(&mut list, props(&state, 1), "space")
            .assert_first(UiAction::TodoToggle(TodoItem::new(3, "Write code", false)));
        press(&mut list, props(&state, 0), "d").assert_first(UiAction::TodoRemove(1.into()));
        press(&mut list, props(&state, 0), "e")
            .assert_first(UiAction::EditStart(TodoItem::new(1, "Buy milk", false)));
    }

    #[test]
    fn test_toggle_all_flips_all_completed() {
        let state = sample();
        let mut list = TodoList::new();
        press(&mut list, props(&state, 0), "a").assert_first(UiAction::ToggleAll(true));

        let done = TodosState::with_todos(vec![TodoItem::new(1, "a", true)]);
        press(&mut list, props(&done, 0), "a").assert_first(UiAction::ToggleAll(false));
    }

    #[test]
    fn test_toggle_all_with_empty_filtered_view() {
        let mut state = TodosState::with_todos(vec![TodoItem::new(1, "a", false)]);
        state.filter = Filter::Completed;
        let mut list = TodoList::new();

        press(&mut list, props(&state, 0), "a").assert_first(UiAction::ToggleAll(true));
        press(&mut list, props(&state, 0), "space").assert_empty();
    }

    #[test]
    fn test_editing_routes_keys_to_input() {
        let state = sample();
        let editing = Editing::of(&state.todos[0]);
        let mut list = TodoList::new();
        let editing_props = || TodoListProps {
            editing: Some(&editing),
            ..props(&state, 0)
        };

        press(&mut list, editing_props(), "!")
            .assert_first(UiAction::EditChange("Buy milk!".into()));
        press(&mut list, editing_props(), "enter")
            .assert_first(UiAction::EditSubmit("Buy milk".into()));
        press(&mut list, editing_props(), "esc").assert_first(UiAction::EditCancel);
        press(&mut list, editing_props(), "d").assert_first(UiAction::EditChange("Buy milkd".into()));
    }

    #[test]
    fn test_unfocused_ignores() {
        let state = sample();
        let mut list = TodoList::new();
        let props = TodoListProps {
            is_focused: false,
            ..props(&state, 0)
        };
        press(&mut list, props, "d").assert_empty();
    }

    #[test]
    fn test_render_rows() {
        let state = sample();
        let mut render = RenderHarness::new(40, 8);
        let mut list = TodoList::new();

        let output = render.render_to_string_plain(|frame| {
            list.render(frame, frame.area(), props(&state, 0));
        });

        assert!(output.contains("[ ] Mark all as complete"));
        assert!(output.contains("> [ ] Buy milk"));
        assert!(output.contains("[x] Walk dog"));
        assert!(output.contains("[ ] Write code"));
    }

    #[test]
    fn test_render_filtered_empty() {
        let mut state = TodosState::with_todos(vec![TodoItem::new(1, "a", false)]);
        state.filter = Filter::Completed;
        let mut render = RenderHarness::new(40, 6);
        let mut list = TodoList::new();

        let output = render.render_to_string_plain(|frame| {
            list.render(frame, frame.area(), props(&state, 0));
        });

        assert!(output.contains("Nothing here"));
    }

    #[test]
    fn test_render_all_completed_checks_toggle_row() {
        let state = TodosState::with_todos(vec![TodoItem::new(1, "a", true)]);
        let mut render = RenderHarness::new(40, 5);
        let mut list = TodoList::new();

        let output = render.render_to_string_plain(|frame| {
            list.render(frame, frame.area(), props(&state, 0));
        });

        assert!(output.contains("[x] Mark all as complete"));
    }
}
