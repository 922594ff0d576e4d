//! Top-level layout and key routing

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};
use todos_core::{view, TodosState};

use crate::action::UiAction;
use crate::components::{
    Component, Footer, FooterProps, Header, HeaderProps, StatusBar, StatusBarProps, TodoList,
    TodoListProps,
};
use crate::event::EventKind;
use crate::runtime::EventOutcome;
use crate::state::{Focus, UiState};

#[derive(Default)]
pub struct TodosUi {
    header: Header,
    list: TodoList,
}

impl TodosUi {
    pub fn new() -> Self {
        Self::default()
    }

    fn list_props<'a>(todos: &'a TodosState, ui: &'a UiState) -> TodoListProps<'a> {
        TodoListProps {
            todos,
            selected: ui.selected,
            editing: ui.editing.as_ref(),
            is_focused: ui.focus == Focus::List,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, todos: &TodosState, ui: &UiState) {
        let hidden = view::is_hidden(todos);
        let [header_area, list_area, footer_area, status_area] = Layout::vertical([
            Constraint::Length(Header::HEIGHT),
            Constraint::Min(0),
            Constraint::Length(if hidden { 0 } else { Footer::HEIGHT }),
            Constraint::Length(1),
        ])
        .areas(area);

        self.header.render(
            frame,
            header_area,
            HeaderProps {
                value: &ui.input,
                is_focused: ui.focus == Focus::Input,
            },
        );

        // No todos: the list and footer are not shown at all
        if !hidden {
            self.list
                .render(frame, list_area, Self::list_props(todos, ui));
            Footer.render(
                frame,
                footer_area,
                FooterProps {
                    todos,
                    is_focused: ui.focus == Focus::List,
                },
            );
        }

        StatusBar.render(
            frame,
            status_area,
            StatusBarProps {
                pending: ui.pending,
                status: ui.status.as_deref(),
                focus: ui.focus,
                is_editing: ui.editing.is_some(),
            },
        );
    }

    pub fn map_event(
        &mut self,
        event: &EventKind,
        todos: &TodosState,
        ui: &UiState,
    ) -> EventOutcome<UiAction> {
        let EventKind::Key(key) = event else {
            return EventOutcome::needs_render();
        };
        if event.is_interrupt() {
            return UiAction::Quit.into();
        }
        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            return UiAction::FocusNext.into();
        }

        match ui.focus {
            // Cursor moves emit nothing but still need a redraw
            Focus::Input => EventOutcome::from_actions(self.header.handle_event(
                event,
                HeaderProps {
                    value: &ui.input,
                    is_focused: true,
                },
            ))
            .with_render(),

            Focus::List if ui.editing.is_some() => {
                EventOutcome::from_actions(self.list.handle_event(event, Self::list_props(todos, ui)))
                    .with_render()
            }

            Focus::List => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => UiAction::Quit.into(),
                KeyCode::Char('r') => UiAction::Refresh.into(),
                _ => {
                    let footer = EventOutcome::from_actions(Footer.handle_event(
                        event,
                        FooterProps {
                            todos,
                            is_focused: true,
                        },
                    ));
                    if !footer.actions.is_empty() {
                        return footer;
                    }
                    EventOutcome::from_actions(
                        self.list.handle_event(event, Self::list_props(todos, ui)),
                    )
                }
            },
        }
    }
}
