//! Demo configuration
//!
//! Read from environment variables:
//!
//! - `TODO_LIST_TITLE`: title of the demo list (default `Today`)
//! - `TODO_ITEMS`: comma-separated item titles (default: three sample items)

use std::fmt;

/// Item titles used when `TODO_ITEMS` is not set
pub const DEFAULT_ITEMS: [&str; 3] = ["Buy milk", "Clean room", "Go to the gym"];

/// List title used when `TODO_LIST_TITLE` is not set
pub const DEFAULT_TITLE: &str = "Today";

/// Configuration error
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Variable set but blank
    Empty(&'static str),
    /// Item list contained a blank entry
    BlankItem {
        /// Zero-based position of the blank entry
        position: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty(var) => write!(f, "Environment variable is empty: {var}"),
            Self::BlankItem { position } => {
                write!(f, "TODO_ITEMS entry {position} is blank")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for the demo walkthrough
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Title of the demo list
    pub list_title: String,
    /// Titles of the items to add, in order
    pub items: Vec<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            list_title: DEFAULT_TITLE.to_string(),
            items: DEFAULT_ITEMS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl DemoConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but blank
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but blank
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(title) = lookup("TODO_LIST_TITLE") {
            if title.trim().is_empty() {
                return Err(ConfigError::Empty("TODO_LIST_TITLE"));
            }
            config.list_title = title;
        }

        if let Some(items) = lookup("TODO_ITEMS") {
            if items.trim().is_empty() {
                return Err(ConfigError::Empty("TODO_ITEMS"));
            }
            config.items = items
                .split(',')
                .enumerate()
                .map(|(position, title)| {
                    let title = title.trim();
                    if title.is_empty() {
                        Err(ConfigError::BlankItem { position })
                    } else {
                        Ok(title.to_string())
                    }
                })
                .collect::<Result<_, _>>()?;
        }

        Ok(config)
    }
}
