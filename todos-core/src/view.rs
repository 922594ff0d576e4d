//! Derived view rules - pure projections of `TodosState`
//!
//! Nothing here is cached; views recompute on every render and get the same
//! values for the same state.

use crate::model::{Filter, TodoItem, TodosState};

/// Items visible under the current filter, in list order
pub fn visible_todos(state: &TodosState) -> Vec<&TodoItem> {
    state
        .todos
        .iter()
        .filter(|todo| state.filter.matches(todo))
        .collect()
}

/// Number of items not yet completed
pub fn remaining_count(state: &TodosState) -> usize {
    state.todos.iter().filter(|t| !t.is_completed).count()
}

/// Whether the list and footer regions are hidden (no todos at all)
pub fn is_hidden(state: &TodosState) -> bool {
    state.todos.is_empty()
}

/// Whether every todo is completed. `false` for an empty list.
pub fn all_completed(state: &TodosState) -> bool {
    !state.todos.is_empty() && state.todos.iter().all(|t| t.is_completed)
}

/// "1 item left" / "3 items left"
pub fn items_left_label(count: usize) -> String {
    if count == 1 {
        "1 item left".to_string()
    } else {
        format!("{} items left", count)
    }
}

/// One entry of the filter selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub filter: Filter,
    pub label: &'static str,
    pub selected: bool,
}

/// The three filter options; exactly one is selected
pub fn filter_options(state: &TodosState) -> [FilterOption; 3] {
    Filter::ALL.map(|filter| FilterOption {
        filter,
        label: filter.label(),
        selected: filter == state.filter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(filter: Filter) -> TodosState {
        TodosState {
            todos: vec![
                TodoItem::new(1, "a", false),
                TodoItem::new(2, "b", false),
                TodoItem::new(3, "c", true),
            ],
            filter,
        }
    }

    fn ids(todos: &[&TodoItem]) -> Vec<String> {
        todos.iter().map(|t| t.id.to_string()).collect()
    }

    #[test]
    fn test_remaining_count() {
        assert_eq!(remaining_count(&sample(Filter::All)), 2);
        assert_eq!(remaining_count(&TodosState::new()), 0);
    }

    #[test]
    fn test_visible_todos_per_filter() {
        assert_eq!(ids(&visible_todos(&sample(Filter::All))), ["1", "2", "3"]);
        assert_eq!(ids(&visible_todos(&sample(Filter::Active))), ["1", "2"]);
        assert_eq!(ids(&visible_todos(&sample(Filter::Completed))), ["3"]);
    }

    #[test]
    fn test_visibility() {
        assert!(is_hidden(&TodosState::new()));
        assert!(!is_hidden(&sample(Filter::Completed)));
    }

    #[test]
    fn test_all_completed() {
        assert!(!all_completed(&TodosState::new()));
        assert!(!all_completed(&sample(Filter::All)));

        let done = TodosState::with_todos(vec![TodoItem::new(1, "a", true)]);
        assert!(all_completed(&done));
    }

    #[test]
    fn test_items_left_label() {
        assert_eq!(items_left_label(0), "0 items left");
        assert_eq!(items_left_label(1), "1 item left");
        assert_eq!(items_left_label(2), "2 items left");
    }

    #[test]
    fn test_exactly_one_filter_selected() {
        for filter in Filter::ALL {
            let options = filter_options(&sample(filter));
            let selected: Vec<_> = options.iter().filter(|o| o.selected).collect();
            assert_eq!(selected.len(), 1);
            assert_eq!(selected[0].filter, filter);
        }
        assert_eq!(
            filter_options(&TodosState::new()).map(|o| o.label),
            ["All", "Active", "Completed"]
        );
    }
}
