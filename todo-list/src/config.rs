//! Configuration for the todo list front end.
//!
//! Loads configuration from environment variables with defaults.

use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use todo_list_runtime::StoreConfig;

/// Environment variable for the incomplete list title
pub const INCOMPLETE_TITLE_VAR: &str = "TODO_INCOMPLETE_TITLE";
/// Environment variable for the complete list title
pub const COMPLETE_TITLE_VAR: &str = "TODO_COMPLETE_TITLE";
/// Environment variable for the input placeholder
pub const PLACEHOLDER_VAR: &str = "TODO_PLACEHOLDER";
/// Environment variable for the store's dispatch depth limit
pub const MAX_DISPATCH_DEPTH_VAR: &str = "TODO_MAX_DISPATCH_DEPTH";

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set to a value that cannot be used
    #[error("invalid value {value:?} for {name}: {reason}")]
    Invalid {
        /// Variable name
        name: &'static str,
        /// Raw value
        value: String,
        /// What was wrong with it
        reason: String,
    },
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoConfig {
    /// Text view labels
    pub view: ViewConfig,
    /// Longest chain of dispatched actions a single send may run
    pub max_dispatch_depth: usize,
}

/// Labels used by the text view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Heading of the incomplete list
    pub incomplete_title: String,
    /// Heading of the complete list
    pub complete_title: String,
    /// Shown in the input line while nothing has been typed
    pub placeholder: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            incomplete_title: "Incomplete".to_string(),
            complete_title: "Complete".to_string(),
            placeholder: "Enter a todo".to_string(),
        }
    }
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            view: ViewConfig::default(),
            max_dispatch_depth: StoreConfig::DEFAULT_MAX_DISPATCH_DEPTH,
        }
    }
}

impl TodoConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a variable is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    ///
    /// Unset variables fall back to [`TodoConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a variable is set but unusable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_dispatch_depth = match lookup(MAX_DISPATCH_DEPTH_VAR) {
            Some(raw) => parse_depth(&raw)?,
            None => defaults.max_dispatch_depth,
        };

        Ok(Self {
            view: ViewConfig {
                incomplete_title: lookup(INCOMPLETE_TITLE_VAR)
                    .unwrap_or(defaults.view.incomplete_title),
                complete_title: lookup(COMPLETE_TITLE_VAR)
                    .unwrap_or(defaults.view.complete_title),
                placeholder: lookup(PLACEHOLDER_VAR).unwrap_or(defaults.view.placeholder),
            },
            max_dispatch_depth,
        })
    }

    /// Store configuration derived from this config
    #[must_use]
    pub const fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.max_dispatch_depth)
    }
}

fn parse_depth(raw: &str) -> Result<usize, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        name: MAX_DISPATCH_DEPTH_VAR,
        value: raw.to_string(),
        reason,
    };

    match raw.trim().parse::<usize>() {
        Ok(0) => Err(invalid("must be at least 1".to_string())),
        Ok(depth) => Ok(depth),
        Err(e) => Err(invalid(e.to_string())),
    }
}
