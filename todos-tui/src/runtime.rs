//! Event/action/render loop
//!
//! The runtime is the single writer of both stores:
//! 1. Key press -> `TodosUi::map_event` -> `UiAction`s
//! 2. `UiAction` -> `ui_reducer` -> UI state change plus `Effect`s
//! 3. Remote effects are spawned on the [`TaskManager`]; each task calls one
//!    `TodoActions` operation, which dispatches a `TodosAction` on success
//! 4. `TodosAction`s arrive on the todo store's queue and are applied in order
//! 5. If either store changed, the next iteration re-renders

use std::io;
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use todos_core::{
    EffectStore, LoggingMiddleware, Result as RemoteResult, TodosAction, TodosState, TodosStore,
};

use crate::action::UiAction;
use crate::effect::Effect;
use crate::event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
use crate::reducer::ui_reducer;
use crate::state::UiState;
use crate::tasks::TaskManager;
use crate::ui::TodosUi;

/// How often the crossterm poller wakes up
#[derive(Debug, Clone, Copy)]
pub struct PollerConfig {
    /// Upper bound on one `crossterm::event::poll` wait
    pub poll_timeout: Duration,
    /// Pause between batches
    pub loop_sleep: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(10),
            loop_sleep: Duration::from_millis(16),
        }
    }
}

/// Actions produced by one event, plus whether to redraw regardless
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOutcome<A> {
    pub actions: Vec<A>,
    pub needs_render: bool,
}

impl<A> EventOutcome<A> {
    pub fn ignored() -> Self {
        Self {
            actions: Vec::new(),
            needs_render: false,
        }
    }

    pub fn needs_render() -> Self {
        Self {
            actions: Vec::new(),
            needs_render: true,
        }
    }

    /// Collect whatever `Component::handle_event` returned
    pub fn from_actions(iter: impl IntoIterator<Item = A>) -> Self {
        Self {
            actions: iter.into_iter().collect(),
            needs_render: false,
        }
    }

    pub fn with_render(mut self) -> Self {
        self.needs_render = true;
        self
    }
}

impl<A> Default for EventOutcome<A> {
    fn default() -> Self {
        Self::ignored()
    }
}

impl<A> From<A> for EventOutcome<A> {
    fn from(action: A) -> Self {
        Self {
            actions: vec![action],
            needs_render: false,
        }
    }
}

/// Map an operation result onto the action reported back to the UI
fn report(op: &'static str, result: RemoteResult<()>) -> UiAction {
    match result {
        Ok(()) => UiAction::TaskDidComplete(op),
        Err(error) => {
            tracing::warn!(op, %error, "Remote call failed");
            UiAction::TaskDidFail {
                op,
                error: error.to_string(),
            }
        }
    }
}

pub struct TodosRuntime {
    todos: TodosStore,
    ui: EffectStore<UiState, UiAction, Effect, LoggingMiddleware>,
    action_tx: mpsc::UnboundedSender<UiAction>,
    action_rx: mpsc::UnboundedReceiver<UiAction>,
    tasks: TaskManager<UiAction>,
    poller_config: PollerConfig,
    should_render: bool,
}

impl TodosRuntime {
    pub fn new(todos: TodosStore) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            todos,
            ui: EffectStore::with_middleware(UiState::new(), ui_reducer, LoggingMiddleware::new()),
            tasks: TaskManager::new(action_tx.clone()),
            action_tx,
            action_rx,
            poller_config: PollerConfig::default(),
            should_render: true,
        }
    }

    /// Queue a UI action for the next loop iteration
    pub fn enqueue(&self, action: UiAction) {
        let _ = self.action_tx.send(action);
    }

    pub fn todos(&self) -> &TodosState {
        self.todos.state()
    }

    pub fn ui_state(&self) -> &UiState {
        self.ui.state()
    }

    pub fn tasks(&self) -> &TaskManager<UiAction> {
        &self.tasks
    }

    /// Run one UI action through the reducer and carry out its effects.
    /// Returns `false` for [`UiAction::Quit`].
    pub fn dispatch(&mut self, action: UiAction) -> bool {
        if action == UiAction::Quit {
            return false;
        }
        let result = self.ui.dispatch(action);
        for effect in result.effects {
            self.handle_effect(effect);
        }
        self.should_render |= result.changed;
        true
    }

    /// Map a terminal event and dispatch its actions right away, so the next
    /// event is mapped against the updated UI state. Returns `false` on quit.
    pub fn handle_event(&mut self, event: &EventKind, ui: &mut TodosUi) -> bool {
        let outcome = ui.map_event(event, self.todos.state(), self.ui.state());
        self.should_render |= outcome.needs_render;
        for action in outcome.actions {
            if !self.dispatch(action) {
                return false;
            }
        }
        true
    }

    /// Apply one action from the todo store's queue
    pub fn apply(&mut self, action: TodosAction) {
        self.should_render |= self.todos.dispatch(action);
    }

    /// Wait for the next UI action (task results included)
    pub async fn next_action(&mut self) -> Option<UiAction> {
        self.action_rx.recv().await
    }

    /// Wait for the next queued todo action
    pub async fn next_todos_action(&mut self) -> Option<TodosAction> {
        self.todos.recv().await
    }

    fn handle_effect(&mut self, effect: Effect) {
        let actions = self.todos.context().actions;
        let op = effect.op();

        match effect {
            Effect::ChangeFilter(filter) => actions.change_filter(filter),
            Effect::AddTodo(draft) => {
                self.tasks
                    .spawn(op, async move { report(op, actions.add_todo(draft).await) });
            }
            Effect::UpdateTodo { id, fields } => {
                self.tasks.spawn(op, async move {
                    report(op, actions.update_todo(id, fields).await)
                });
            }
            Effect::RemoveTodo(id) => {
                self.tasks
                    .spawn(op, async move { report(op, actions.remove_todo(id).await) });
            }
            Effect::ToggleAll(flag) => {
                self.tasks
                    .spawn(op, async move { report(op, actions.toggle_all(flag).await) });
            }
            Effect::Refresh => {
                self.tasks
                    .spawn(op, async move { report(op, actions.get_todos().await) });
            }
        }
    }

    pub async fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        ui: &mut TodosUi,
    ) -> io::Result<()> {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
        let cancel_token = CancellationToken::new();
        let _handle = spawn_event_poller(
            event_tx,
            self.poller_config.poll_timeout,
            self.poller_config.loop_sleep,
            cancel_token.clone(),
        );

        loop {
            if self.should_render {
                let (todos, state) = (self.todos.state(), self.ui.state());
                terminal.draw(|frame| ui.render(frame, frame.area(), todos, state))?;
                self.should_render = false;
            }

            tokio::select! {
                Some(raw_event) = event_rx.recv() => {
                    let Some(event) = process_raw_event(raw_event) else {
                        continue;
                    };
                    if !self.handle_event(&event, ui) {
                        break;
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if !self.dispatch(action) {
                        break;
                    }
                }

                Some(action) = self.todos.recv() => {
                    self.apply(action);
                }

                else => {
                    break;
                }
            }
        }

        cancel_token.cancel();
        self.tasks.cancel_all();
        tracing::info!("Runtime stopped");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_outcome_from_action() {
        let outcome: EventOutcome<UiAction> = UiAction::Refresh.into();
        assert_eq!(outcome.actions, vec![UiAction::Refresh]);
        assert!(!outcome.needs_render);
    }

    #[test]
    fn test_event_outcome_with_render() {
        let outcome = EventOutcome::from_actions(None::<UiAction>).with_render();
        assert!(outcome.actions.is_empty());
        assert!(outcome.needs_render);
        assert_eq!(EventOutcome::<UiAction>::default(), EventOutcome::ignored());
    }
}
