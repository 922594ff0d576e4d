use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::{Component, TextInput, TextInputProps};
use crate::action::UiAction;
use crate::event::EventKind;

pub const PLACEHOLDER: &str = "What needs to be done?";

/// Title plus the new-todo input
#[derive(Default)]
pub struct Header {
    input: TextInput,
}

pub struct HeaderProps<'a> {
    pub value: &'a str,
    pub is_focused: bool,
}

impl Header {
    pub const HEIGHT: u16 = 4;

    pub fn new() -> Self {
        Self::default()
    }

    fn input_props<'a>(props: &HeaderProps<'a>) -> TextInputProps<'a, UiAction> {
        TextInputProps {
            value: props.value,
            placeholder: PLACEHOLDER,
            is_focused: props.is_focused,
            title: Some("new todo"),
            on_change: UiAction::InputChange,
            on_submit: UiAction::InputSubmit,
        }
    }
}

impl Component<UiAction> for Header {
    type Props<'a> = HeaderProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = UiAction> {
        let props = Self::input_props(&props);
        self.input.handle_event(event, props)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [title_area, input_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(3)]).areas(area);

        let title = Line::from("todos".fg(Color::Red).bold()).centered();
        frame.render_widget(Paragraph::new(title), title_area);

        self.input
            .render(frame, input_area, Self::input_props(&props));
    }
}
