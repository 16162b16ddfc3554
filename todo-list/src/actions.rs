//! Commands the view layer sends and the events that record their outcome.

use crate::error::TodoError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use todo_list_macros::Action;

/// Actions representing commands and events for the todo list
///
/// Commands carry what the user asked for, addressed by the row's index at
/// the moment of the request. The reducer validates them against current
/// state and answers with exactly one event.
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    // ========== Commands ==========
    /// Command: Replace the pending input
    #[command]
    SetPendingText {
        /// New input text
        text: String,
    },

    /// Command: Submit the pending input as a new incomplete item
    #[command]
    Add,

    /// Command: Delete an incomplete item
    #[command]
    DeleteIncomplete {
        /// Current position in the incomplete list
        index: usize,
    },

    /// Command: Mark an incomplete item as done
    #[command]
    Complete {
        /// Current position in the incomplete list
        index: usize,
    },

    /// Command: Move a done item back to the incomplete list
    #[command]
    Restore {
        /// Current position in the complete list
        index: usize,
    },

    // ========== Events ==========
    /// Event: The pending input changed
    #[event]
    PendingTextChanged {
        /// New input text
        text: String,
    },

    /// Event: An item was appended to the incomplete list
    #[event]
    TodoAdded {
        /// Text of the new item
        text: String,
        /// When the item was added
        added_at: DateTime<Utc>,
    },

    /// Event: An incomplete item was deleted
    #[event]
    TodoDeleted {
        /// Position it was deleted from
        index: usize,
        /// Text of the deleted item
        text: String,
    },

    /// Event: An incomplete item moved to the complete list
    #[event]
    TodoCompleted {
        /// Position in the incomplete list it moved from
        index: usize,
        /// Text of the item
        text: String,
        /// When the item was completed
        completed_at: DateTime<Utc>,
    },

    /// Event: A complete item moved back to the incomplete list
    #[event]
    TodoRestored {
        /// Position in the complete list it moved from
        index: usize,
        /// Text of the item
        text: String,
        /// When the item was restored
        restored_at: DateTime<Utc>,
    },

    /// Event: A command was rejected
    #[event]
    ValidationFailed {
        /// Why it was rejected
        error: TodoError,
    },
}
