//! Errors reported by todo list operations.

use crate::types::ListKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from operations on [`TodoListState`](crate::TodoListState)
///
/// Every variant leaves the lists exactly as they were. Errors are
/// serializable because the reducer records them in `ValidationFailed`
/// events.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoError {
    /// The index does not address an item in the list right now
    #[error("index {index} is out of range for the {list} list ({len} items)")]
    IndexOutOfRange {
        /// List the index was checked against
        list: ListKind,
        /// Requested position
        index: usize,
        /// Length of the list at the time of the check
        len: usize,
    },

    /// An event named an item that is no longer at the recorded position
    #[error("the {list} list no longer holds {expected:?} at index {index}")]
    ItemMismatch {
        /// List the index was checked against
        list: ListKind,
        /// Requested position
        index: usize,
        /// Text the event expected at that position
        expected: String,
    },
}

impl TodoError {
    /// The list the failing operation targeted
    #[must_use]
    pub const fn list(&self) -> ListKind {
        match self {
            Self::IndexOutOfRange { list, .. } | Self::ItemMismatch { list, .. } => *list,
        }
    }
}
