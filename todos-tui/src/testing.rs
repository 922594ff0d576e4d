//! Test utilities for the todo front-end
//!
//! - [`key`]: build a `KeyEvent` from a string (`key("ctrl+c")`, `key("enter")`)
//! - [`RenderHarness`]: render into a `TestBackend` and read the screen back
//! - [`ActionAssertions`]: assertions over emitted actions
//!
//! ```
//! use todos_tui::testing::{key, ActionAssertions};
//! use todos_tui::UiAction;
//!
//! let actions = vec![UiAction::Refresh];
//! actions.assert_first(UiAction::Refresh);
//! assert_eq!(key("q").code, crossterm::event::KeyCode::Char('q'));
//! ```

use std::fmt::Debug;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::{Frame, Terminal};

use crate::event::EventKind;

/// Parse `"ctrl+c"`, `"shift+tab"`, `"enter"`, `"x"`, ... into a key press
///
/// # Panics
/// On strings that name no key.
pub fn key(s: &str) -> KeyEvent {
    parse_key(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// Key event wrapped as an [`EventKind`]
pub fn key_event(s: &str) -> EventKind {
    EventKind::Key(key(s))
}

pub fn char_key(c: char) -> KeyEvent {
    press(KeyCode::Char(c), KeyModifiers::empty())
}

pub fn ctrl_key(c: char) -> KeyEvent {
    press(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn parse_key(s: &str) -> Option<KeyEvent> {
    let s = s.trim().to_lowercase();
    if s == "shift+tab" || s == "backtab" {
        return Some(press(KeyCode::BackTab, KeyModifiers::SHIFT));
    }

    let (mods, name) = match s.rsplit_once('+') {
        // "+" on its own is a key, not a separator
        Some((mods, "")) => (mods.trim_end_matches('+'), "+"),
        Some((mods, name)) => (mods, name),
        None => ("", s.as_str()),
    };

    let mut modifiers = KeyModifiers::empty();
    for part in mods.split('+').filter(|p| !p.is_empty()) {
        match part {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => return None,
        }
    }

    let code = match name {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };

    Some(press(code, modifiers))
}

/// Renders into an in-memory terminal for snapshot-style assertions
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    pub fn new(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("TestBackend never fails");
        Self { terminal }
    }

    /// Draw one frame and return the resulting buffer
    pub fn render<F>(&mut self, render: F) -> &Buffer
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal
            .draw(render)
            .expect("TestBackend never fails");
        self.terminal.backend().buffer()
    }

    /// Draw one frame and return its text, one line per row, without styles
    /// or trailing spaces
    pub fn render_to_string_plain<F>(&mut self, render: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        buffer_to_string(self.render(render))
    }
}

pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            let line: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collect whatever `Component::handle_event` returned
pub fn collect<A>(actions: impl IntoIterator<Item = A>) -> Vec<A> {
    actions.into_iter().collect()
}

/// Assertions over a batch of emitted actions
pub trait ActionAssertions<A> {
    fn assert_empty(&self);
    fn assert_count(&self, n: usize);
    fn assert_first(&self, expected: A);
    fn assert_contains(&self, expected: A);
}

impl<A: PartialEq + Debug> ActionAssertions<A> for Vec<A> {
    fn assert_empty(&self) {
        assert!(self.is_empty(), "Expected no actions, got: {:?}", self);
    }

    fn assert_count(&self, n: usize) {
        assert_eq!(self.len(), n, "Unexpected actions: {:?}", self);
    }

    fn assert_first(&self, expected: A) {
        assert_eq!(self.first(), Some(&expected), "Actions: {:?}", self);
    }

    fn assert_contains(&self, expected: A) {
        assert!(
            self.contains(&expected),
            "Expected {:?} to be emitted, got: {:?}",
            expected,
            self
        );
    }
}
