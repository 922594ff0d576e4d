//! UI components
//!
//! Components render from read-only props and turn key presses into
//! [`UiAction`](crate::UiAction)s. Focus is passed in through props.

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

pub mod footer;
pub mod header;
pub mod status_bar;
pub mod text_input;
pub mod todo_list;

pub use footer::{Footer, FooterProps};
pub use header::{Header, HeaderProps};
pub use status_bar::{StatusBar, StatusBarProps};
pub use text_input::{TextInput, TextInputProps};
pub use todo_list::{TodoList, TodoListProps};

/// A UI element that renders from props and emits actions
///
/// Data changes go through the returned actions. Purely visual state (a
/// cursor position, say) may live in `&mut self`.
pub trait Component<A> {
    /// Data required to render the component
    type Props<'a>;

    /// Handle an event and return actions to dispatch
    ///
    /// Return `None` for no action, `Some(action)` for one, or a `Vec`.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
