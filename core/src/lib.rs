//! # Todolist Core
//!
//! An in-memory todo list: titled items with a done flag, collected in an
//! ordered list with positional access, search, bulk updates, and filtering.
//!
//! ## Core Concepts
//!
//! - **Item**: a fixed title plus a done/undone flag
//! - **`SharedItem`**: a handle to an item; lists share items rather than copy them
//! - **`ItemList`**: an ordered, titled collection of shared items
//! - **`ListIndex`**: any numeric value that may address a position
//! - **`ListError`**: `InvalidArgument` and `OutOfRange`
//!
//! ## Rendering
//!
//! Items render as `[X] <title>` when done and `[ ] <title>` otherwise. A
//! list renders as a `---- <title> ----` header followed by one line per
//! item, each terminated by a newline.
//!
//! ## Example
//!
//! ```
//! use todolist_core::{Item, ItemList};
//!
//! let mut list = ItemList::new("Today");
//! list.add(Item::shared("Buy milk"));
//! list.add(Item::shared("Clean room"));
//! list.add(Item::shared("Go to the gym"));
//!
//! list.mark_done("Clean room");
//!
//! let done = list.all_done();
//! assert_eq!(done.len(), 1);
//! assert_eq!(list.all_not_done().len(), 2);
//!
//! // Derived lists share items with their source
//! done.mark_all_undone();
//! assert!(!list.item_at(1)?.is_done());
//! # Ok::<(), todolist_core::ListError>(())
//! ```

pub mod error;
pub mod index;
pub mod item;
pub mod list;
pub mod wire;

// Re-export commonly used types
pub use error::{ListError, Result};
pub use index::ListIndex;
pub use item::{Item, SharedItem};
pub use list::ItemList;
pub use wire::{ItemRecord, ListRecord};
