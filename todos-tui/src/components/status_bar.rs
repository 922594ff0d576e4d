use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::UiAction;
use crate::state::Focus;

pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Sync indicator, last failure and key hints
pub struct StatusBar;

pub struct StatusBarProps<'a> {
    pub pending: usize,
    pub status: Option<&'a str>,
    pub focus: Focus,
    pub is_editing: bool,
}

fn hints(props: &StatusBarProps<'_>) -> &'static [(&'static str, &'static str)] {
    if props.is_editing {
        &[("enter", "save"), ("esc", "cancel")]
    } else {
        match props.focus {
            Focus::Input => &[("enter", "add"), ("tab", "list"), ("ctrl+c", "quit")],
            Focus::List => &[
                ("space", "toggle"),
                ("e", "edit"),
                ("d", "delete"),
                ("a", "all"),
                ("1-3", "filter"),
                ("r", "refresh"),
                ("q", "quit"),
            ],
        }
    }
}

impl Component<UiAction> for StatusBar {
    type Props<'a> = StatusBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let mut spans = Vec::new();
        if props.pending > 0 {
            let spinner = SPINNERS[props.pending % SPINNERS.len()];
            spans.push(Span::styled(
                format!(" {spinner} syncing {} ", props.pending),
                Style::default().fg(Color::Yellow),
            ));
        }
        if let Some(status) = props.status {
            spans.push(Span::styled(
                format!(" ⚠ {status} "),
                Style::default().fg(Color::Red).bold(),
            ));
        }
        for (key, label) in hints(&props) {
            spans.push(Span::styled(format!(" {key}"), Style::default().fg(Color::Cyan).bold()));
            spans.push(Span::styled(format!(" {label} "), Style::default().fg(Color::DarkGray)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
