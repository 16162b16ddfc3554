//! Domain types for the todo list.
//!
//! A todo item is nothing but its text. It has no identifier: an item is
//! addressed by its position in the list that currently holds it, and two
//! items with the same text are still two items.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoItem(String);

impl TodoItem {
    /// Creates a todo item with the given text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the item's text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Consumes the item, returning its text
    #[must_use]
    pub fn into_text(self) -> String {
        self.0
    }
}

impl fmt::Display for TodoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TodoItem {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for TodoItem {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl AsRef<str> for TodoItem {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TodoItem {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TodoItem {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// The two lists an item can live in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    /// Items not done yet
    Incomplete,
    /// Items marked done
    Complete,
}

impl ListKind {
    /// The list an item moves to when it is completed or restored
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Incomplete => Self::Complete,
            Self::Complete => Self::Incomplete,
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete => f.write_str("incomplete"),
            Self::Complete => f.write_str("complete"),
        }
    }
}
