//! A two-list todo model: pending input, incomplete items and complete items.
//!
//! The model is [`TodoListState`]. It can be driven directly through its
//! operations, or through a [`Store`](todo_list_runtime::Store) running
//! [`TodoReducer`], which turns user commands into validated events and
//! tells subscribers (the view) when to redraw.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use todo_list::{TodoAction, TodoEnvironment, TodoListState, TodoReducer};
//! use todo_list_core::environment::SystemClock;
//! use todo_list_runtime::Store;
//!
//! # fn main() -> Result<(), todo_list_runtime::StoreError> {
//! let env = TodoEnvironment::new(Arc::new(SystemClock));
//! let mut store = Store::new(TodoListState::new(), TodoReducer::new(), env);
//!
//! store.send(TodoAction::SetPendingText { text: "buy milk".to_string() })?;
//! store.send(TodoAction::Add)?;
//! store.send(TodoAction::Complete { index: 0 })?;
//!
//! let state = store.state_ref();
//! assert!(state.incomplete_items().is_empty());
//! assert_eq!(state.complete_items(), ["buy milk"]);
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod config;
pub mod error;
pub mod reducer;
pub mod state;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use actions::TodoAction;
pub use config::{ConfigError, TodoConfig, ViewConfig};
pub use error::TodoError;
pub use reducer::{TodoEnvironment, TodoReducer};
pub use state::{AddOutcome, TodoListState};
pub use types::{ListKind, TodoItem};
