//! Error types for list operations

use thiserror::Error;

/// Convenience alias for results produced by list operations
pub type Result<T, E = ListError> = std::result::Result<T, E>;

/// Errors that can occur when operating on an [`ItemList`](crate::ItemList)
///
/// "No match" outcomes (empty list, unknown title) are not errors; those
/// operations return `Option` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// A value that is not an item was offered where an item is required
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An index was negative, fractional, or past the end of the list
    #[error("Invalid index: {index}")]
    OutOfRange {
        /// The rejected index, as supplied by the caller
        index: String,
    },
}

impl ListError {
    /// Builds an [`OutOfRange`](Self::OutOfRange) error for the given index
    #[must_use]
    pub fn out_of_range(index: impl std::fmt::Display) -> Self {
        Self::OutOfRange {
            index: index.to_string(),
        }
    }

    /// Builds an [`InvalidArgument`](Self::InvalidArgument) error
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }
}
