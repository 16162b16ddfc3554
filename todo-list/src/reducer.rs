//! Reducer logic for the todo list.
//!
//! Commands are validated against current state and answered with a single
//! dispatched event. Events re-check the position they refer to before they
//! touch the lists, so an event that no longer fits the state is recorded as
//! a validation failure instead of moving the wrong item.

use crate::actions::TodoAction;
use crate::error::TodoError;
use crate::state::{AddOutcome, TodoListState};
use crate::types::ListKind;
use std::sync::Arc;
use todo_list_core::{
    effect::Effect, environment::Clock, reducer::Reducer, smallvec, SmallVec,
};

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Clock for event timestamps
    pub clock: Arc<dyn Clock>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

/// Reducer for the todo list
#[derive(Clone, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Answers a command with its event, or with `ValidationFailed`
    fn respond(event: Result<TodoAction, TodoError>) -> SmallVec<[Effect<TodoAction>; 4]> {
        let event = event.unwrap_or_else(|error| TodoAction::ValidationFailed { error });
        smallvec![Effect::dispatch(event)]
    }

    /// Applies an event to state
    fn apply_event(state: &mut TodoListState, event: TodoAction) {
        let applied = match event {
            TodoAction::PendingTextChanged { text } => {
                state.set_pending_text(text);
                Ok(())
            },
            TodoAction::TodoAdded { text, .. } => {
                if state.append_added(text) == AddOutcome::EmptyInputIgnored {
                    tracing::debug!("Ignoring TodoAdded with empty text");
                    return;
                }
                Ok(())
            },
            TodoAction::TodoDeleted { index, text } => state
                .check_item(ListKind::Incomplete, index, &text)
                .and_then(|()| state.delete_incomplete(index))
                .map(drop),
            TodoAction::TodoCompleted { index, text, .. } => state
                .check_item(ListKind::Incomplete, index, &text)
                .and_then(|()| state.complete(index))
                .map(drop),
            TodoAction::TodoRestored { index, text, .. } => state
                .check_item(ListKind::Complete, index, &text)
                .and_then(|()| state.restore(index))
                .map(drop),
            TodoAction::ValidationFailed { error } => Err(error),
            // Commands are not applied to state
            TodoAction::SetPendingText { .. }
            | TodoAction::Add
            | TodoAction::DeleteIncomplete { .. }
            | TodoAction::Complete { .. }
            | TodoAction::Restore { .. } => return,
        };

        match applied {
            Ok(()) => state.clear_error(),
            Err(error) => {
                tracing::warn!(%error, list = %error.list(), "Todo action rejected");
                state.record_error(error);
            },
        }
    }
}

impl Reducer for TodoReducer {
    type State = TodoListState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        tracing::debug!(action = action.name(), "Reducing todo action");

        match action {
            // ========== Commands ==========
            TodoAction::SetPendingText { text } => {
                smallvec![Effect::dispatch(TodoAction::PendingTextChanged { text })]
            },

            TodoAction::Add => {
                if state.pending_text().is_empty() {
                    tracing::debug!("Ignoring add with empty input");
                    return SmallVec::new();
                }

                smallvec![Effect::dispatch(TodoAction::TodoAdded {
                    text: state.pending_text().to_owned(),
                    added_at: env.clock.now(),
                })]
            },

            TodoAction::DeleteIncomplete { index } => Self::respond(
                state
                    .check_index(ListKind::Incomplete, index)
                    .map(|item| TodoAction::TodoDeleted {
                        index,
                        text: item.text().to_owned(),
                    }),
            ),

            TodoAction::Complete { index } => Self::respond(
                state
                    .check_index(ListKind::Incomplete, index)
                    .map(|item| TodoAction::TodoCompleted {
                        index,
                        text: item.text().to_owned(),
                        completed_at: env.clock.now(),
                    }),
            ),

            TodoAction::Restore { index } => Self::respond(
                state
                    .check_index(ListKind::Complete, index)
                    .map(|item| TodoAction::TodoRestored {
                        index,
                        text: item.text().to_owned(),
                        restored_at: env.clock.now(),
                    }),
            ),

            // ========== Events ==========
            event => {
                Self::apply_event(state, event);
                SmallVec::new()
            },
        }
    }
}
