//! A single todo item.
//!
//! An item has a fixed title and a done flag. Items are shared between lists
//! through [`SharedItem`], so marking an item done through one list is
//! visible through every other list that holds it.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared handle to an [`Item`]
///
/// Lists hold these handles rather than owning their items outright.
pub type SharedItem = Arc<Item>;

/// A titled todo with a done/undone flag
#[derive(Debug)]
pub struct Item {
    title: String,
    done: AtomicBool,
}

impl Item {
    /// Marker rendered for a done item
    pub const DONE_MARKER: char = 'X';

    /// Marker rendered for an item that is not done
    pub const UNDONE_MARKER: char = ' ';

    /// Creates a new item that is not done
    ///
    /// Any displayable value is accepted and converted to its string form.
    #[must_use]
    pub fn new(title: impl fmt::Display) -> Self {
        Self {
            title: title.to_string(),
            done: AtomicBool::new(false),
        }
    }

    /// Creates a new item wrapped in a [`SharedItem`] handle
    #[must_use]
    pub fn shared(title: impl fmt::Display) -> SharedItem {
        Arc::new(Self::new(title))
    }

    /// Marks the item as done
    pub fn mark_done(&self) {
        self.done.store(true, Ordering::Release);
    }

    /// Marks the item as not done
    pub fn mark_undone(&self) {
        self.done.store(false, Ordering::Release);
    }

    /// Returns `true` if the item is done
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }

    /// Returns the item's title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the marker for the item's current state
    #[must_use]
    pub fn marker(&self) -> char {
        if self.is_done() {
            Self::DONE_MARKER
        } else {
            Self::UNDONE_MARKER
        }
    }

    /// Renders the item as `[X] <title>` or `[ ] <title>`
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Returns `true` if both handles point at the same item
    ///
    /// Two distinct items with equal titles and state are not the same.
    #[must_use]
    pub fn same(a: &SharedItem, b: &SharedItem) -> bool {
        Arc::ptr_eq(a, b)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.marker(), self.title)
    }
}
