//! The todo list model: pending input plus the incomplete and complete lists.
//!
//! Every item lives in exactly one of the two lists. Positions are always
//! dense, so removing an item shifts everything after it left by one. An
//! index is only meaningful against the list as it is right now, which is
//! why every index-taking operation checks bounds first and leaves the state
//! untouched when the check fails.

use crate::error::TodoError;
use crate::types::{ListKind, TodoItem};
use serde::{Deserialize, Serialize};

/// Result of [`TodoListState::add`]
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// The pending text was appended to the incomplete list at `index`
    Added {
        /// Position of the new item in the incomplete list
        index: usize,
    },
    /// The pending text was empty; nothing changed
    EmptyInputIgnored,
}

/// State of the todo list
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoListState {
    pending_text: String,
    incomplete: Vec<TodoItem>,
    complete: Vec<TodoItem>,
    last_error: Option<TodoError>,
}

impl TodoListState {
    /// Creates an empty todo list with no pending input
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a todo list already holding the given items
    ///
    /// ```
    /// use todo_list::TodoListState;
    ///
    /// let state = TodoListState::from_lists(["a", "b"], ["c"]);
    /// assert_eq!(state.incomplete_items(), ["a", "b"]);
    /// assert_eq!(state.complete_items(), ["c"]);
    /// ```
    #[must_use]
    pub fn from_lists<I, C>(incomplete: I, complete: C) -> Self
    where
        I: IntoIterator,
        I::Item: Into<TodoItem>,
        C: IntoIterator,
        C::Item: Into<TodoItem>,
    {
        Self {
            pending_text: String::new(),
            incomplete: incomplete.into_iter().map(Into::into).collect(),
            complete: complete.into_iter().map(Into::into).collect(),
            last_error: None,
        }
    }

    /// Returns the same state with `text` as the pending input
    #[must_use]
    pub fn with_pending_text(mut self, text: impl Into<String>) -> Self {
        self.pending_text = text.into();
        self
    }

    // ========== Reads ==========

    /// The not-yet-submitted input
    #[must_use]
    pub fn pending_text(&self) -> &str {
        &self.pending_text
    }

    /// Items not done yet, in insertion order
    #[must_use]
    pub fn incomplete_items(&self) -> &[TodoItem] {
        &self.incomplete
    }

    /// Items marked done, in the order they were completed
    #[must_use]
    pub fn complete_items(&self) -> &[TodoItem] {
        &self.complete
    }

    /// Items of the given list
    #[must_use]
    pub fn items(&self, list: ListKind) -> &[TodoItem] {
        match list {
            ListKind::Incomplete => &self.incomplete,
            ListKind::Complete => &self.complete,
        }
    }

    /// Total number of items across both lists
    #[must_use]
    pub fn len(&self) -> usize {
        self.incomplete.len() + self.complete.len()
    }

    /// Returns true if neither list holds an item
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.incomplete.is_empty() && self.complete.is_empty()
    }

    /// The most recent rejected action, cleared by the next accepted one
    #[must_use]
    pub const fn last_error(&self) -> Option<&TodoError> {
        self.last_error.as_ref()
    }

    /// Returns the item at `index` in `list`
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::IndexOutOfRange`] if `index` is not a current
    /// position in `list`.
    pub fn check_index(&self, list: ListKind, index: usize) -> Result<&TodoItem, TodoError> {
        let items = self.items(list);
        items.get(index).ok_or(TodoError::IndexOutOfRange {
            list,
            index,
            len: items.len(),
        })
    }

    /// Checks that `list` still holds `expected` at `index`
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::IndexOutOfRange`] if the index is stale and
    /// [`TodoError::ItemMismatch`] if a different item sits there now.
    pub fn check_item(&self, list: ListKind, index: usize, expected: &str) -> Result<(), TodoError> {
        if self.check_index(list, index)? == expected {
            Ok(())
        } else {
            Err(TodoError::ItemMismatch {
                list,
                index,
                expected: expected.to_owned(),
            })
        }
    }

    // ========== Mutations ==========

    /// Replaces the pending input
    pub fn set_pending_text(&mut self, text: impl Into<String>) {
        self.pending_text = text.into();
    }

    /// Appends the pending input to the incomplete list and clears it
    ///
    /// Empty input is ignored: nothing changes and
    /// [`AddOutcome::EmptyInputIgnored`] is returned.
    pub fn add(&mut self) -> AddOutcome {
        if self.pending_text.is_empty() {
            return AddOutcome::EmptyInputIgnored;
        }

        let text = std::mem::take(&mut self.pending_text);
        self.incomplete.push(TodoItem::from(text));
        AddOutcome::Added {
            index: self.incomplete.len() - 1,
        }
    }

    /// Removes the incomplete item at `index` for good
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::IndexOutOfRange`] if `index` is not a current
    /// position in the incomplete list. Nothing changes in that case.
    pub fn delete_incomplete(&mut self, index: usize) -> Result<TodoItem, TodoError> {
        self.check_index(ListKind::Incomplete, index)?;
        Ok(self.incomplete.remove(index))
    }

    /// Moves the incomplete item at `index` to the end of the complete list
    ///
    /// Returns the item's new position in the complete list.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::IndexOutOfRange`] if `index` is not a current
    /// position in the incomplete list. Neither list changes in that case.
    pub fn complete(&mut self, index: usize) -> Result<usize, TodoError> {
        self.transfer(ListKind::Incomplete, index)
    }

    /// Moves the complete item at `index` to the end of the incomplete list
    ///
    /// Returns the item's new position in the incomplete list.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::IndexOutOfRange`] if `index` is not a current
    /// position in the complete list. Neither list changes in that case.
    pub fn restore(&mut self, index: usize) -> Result<usize, TodoError> {
        self.transfer(ListKind::Complete, index)
    }

    /// Appends `text` as a new incomplete item and clears the pending input
    ///
    /// This is `add` for a text that was captured earlier, as recorded in a
    /// `TodoAdded` event. Empty text is ignored like in [`Self::add`].
    pub fn append_added(&mut self, text: impl Into<String>) -> AddOutcome {
        let text = text.into();
        if text.is_empty() {
            return AddOutcome::EmptyInputIgnored;
        }

        self.pending_text.clear();
        self.incomplete.push(TodoItem::from(text));
        AddOutcome::Added {
            index: self.incomplete.len() - 1,
        }
    }

    pub(crate) fn record_error(&mut self, error: TodoError) {
        self.last_error = Some(error);
    }

    pub(crate) fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Moves the item at `index` of `from` to the end of the other list
    fn transfer(&mut self, from: ListKind, index: usize) -> Result<usize, TodoError> {
        self.check_index(from, index)?;

        let (source, target) = match from {
            ListKind::Incomplete => (&mut self.incomplete, &mut self.complete),
            ListKind::Complete => (&mut self.complete, &mut self.incomplete),
        };
        target.push(source.remove(index));
        Ok(target.len() - 1)
    }
}
