//! Single-line text input
//!
//! The value lives in UI state; the component only keeps the cursor. Every
//! edit emits `on_change` with the full new value, Enter emits `on_submit`.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::event::EventKind;

pub struct TextInputProps<'a, A> {
    pub value: &'a str,
    /// Shown dimmed while the value is empty
    pub placeholder: &'a str,
    pub is_focused: bool,
    /// Draw a bordered box with this title
    pub title: Option<&'a str>,
    pub on_change: fn(String) -> A,
    pub on_submit: fn(String) -> A,
}

#[derive(Debug, Default)]
pub struct TextInput {
    /// Cursor position in chars
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Put the cursor after the last char of `value`
    pub fn move_to_end(&mut self, value: &str) {
        self.cursor = value.chars().count();
    }

    fn clamp(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.chars().count());
    }

    fn byte_offset(value: &str, cursor: usize) -> usize {
        value
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(value.len())
    }

    fn insert(&mut self, value: &str, c: char) -> String {
        let at = Self::byte_offset(value, self.cursor);
        let mut next = String::with_capacity(value.len() + c.len_utf8());
        next.push_str(&value[..at]);
        next.push(c);
        next.push_str(&value[at..]);
        self.cursor += 1;
        next
    }

    /// Remove the char at `cursor`, if any
    fn remove_at(value: &str, cursor: usize) -> Option<String> {
        let start = Self::byte_offset(value, cursor);
        let c = value[start..].chars().next()?;
        let mut next = String::with_capacity(value.len());
        next.push_str(&value[..start]);
        next.push_str(&value[start + c.len_utf8()..]);
        Some(next)
    }

    fn backspace(&mut self, value: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Self::remove_at(value, self.cursor)
    }
}

impl<A> Component<A> for TextInput {
    type Props<'a> = TextInputProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        let EventKind::Key(key) = event else {
            return None;
        };
        if !props.is_focused {
            return None;
        }
        self.clamp(props.value);

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.move_to_end(props.value);
                    None
                }
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    Some((props.on_change)(String::new()))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => Some((props.on_change)(self.insert(props.value, c))),
            KeyCode::Backspace => self.backspace(props.value).map(props.on_change),
            KeyCode::Delete => Self::remove_at(props.value, self.cursor).map(props.on_change),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor += 1;
                self.clamp(props.value);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.move_to_end(props.value);
                None
            }
            KeyCode::Enter => Some((props.on_submit)(props.value.to_string())),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp(props.value);

        let block = props.title.map(|title| {
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} "))
                .border_style(if props.is_focused {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                })
        });
        let inner = block.as_ref().map_or(area, |b| b.inner(area));
        if let Some(block) = block {
            frame.render_widget(block, area);
        }
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Scroll so the cursor stays visible
        let offset = self.cursor.saturating_sub(inner.width as usize - 1);
        let paragraph = if props.value.is_empty() {
            Paragraph::new(props.placeholder).style(Style::default().fg(Color::DarkGray))
        } else {
            let visible: String = props.value.chars().skip(offset).collect();
            Paragraph::new(visible)
        };
        frame.render_widget(paragraph, inner);

        if props.is_focused {
            let x = inner.x + (self.cursor - offset) as u16;
            frame.set_cursor_position((x, inner.y));
        }
    }
}
