use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use todos_core::{view, Filter, TodosState};

use super::Component;
use crate::action::UiAction;
use crate::event::EventKind;

/// Remaining counter and filter selector
pub struct Footer;

pub struct FooterProps<'a> {
    pub todos: &'a TodosState,
    pub is_focused: bool,
}

impl Footer {
    pub const HEIGHT: u16 = 1;

    fn filter_for_key(code: KeyCode) -> Option<Filter> {
        match code {
            KeyCode::Char('1') => Some(Filter::All),
            KeyCode::Char('2') => Some(Filter::Active),
            KeyCode::Char('3') => Some(Filter::Completed),
            _ => None,
        }
    }
}

impl Component<UiAction> for Footer {
    type Props<'a> = FooterProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = UiAction> {
        if !props.is_focused || view::is_hidden(props.todos) {
            return None;
        }
        match event {
            EventKind::Key(key) => Self::filter_for_key(key.code).map(UiAction::ChangeFilter),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let count = view::items_left_label(view::remaining_count(props.todos));

        let mut links = Vec::new();
        for (n, option) in view::filter_options(props.todos).iter().enumerate() {
            links.push(Span::styled(
                format!(" {}:", n + 1),
                Style::default().fg(Color::DarkGray),
            ));
            if option.selected {
                links.push(Span::styled(
                    format!("[{}]", option.label),
                    Style::default().fg(Color::Yellow).bold(),
                ));
            } else {
                links.push(Span::raw(format!(" {} ", option.label)));
            }
        }

        let [count_area, links_area] =
            Layout::horizontal([Constraint::Length(16), Constraint::Min(0)]).areas(area);
        frame.render_widget(Paragraph::new(format!(" {count}")), count_area);
        frame.render_widget(Paragraph::new(Line::from(links).right_aligned()), links_area);
    }
}
