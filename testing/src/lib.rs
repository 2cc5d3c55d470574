//! # Todolist Testing
//!
//! Testing utilities and helpers for todo lists.
//!
//! This crate provides:
//! - Fixtures for the lists used throughout the test suites
//! - A Given-When-Then builder for list operations
//! - Property-based testing strategies
//! - Assertion helpers for items and lists
//!
//! ## Example
//!
//! ```
//! use todolist_testing::{ListTest, fixtures};
//!
//! ListTest::new()
//!     .given_list(fixtures::today_list())
//!     .when(|list| list.mark_done_at(1))
//!     .then_renders("---- Today ----\n[ ] Buy milk\n[X] Clean room\n[ ] Go to the gym\n")
//!     .run();
//! ```


pub use list_test::{ListTest, assertions};

/// Ready-made lists
pub mod fixtures {
    use todolist_core::{Item, ItemList};

    /// Titles of the items in [`today_list`], in order
    pub const TODAY_TITLES: [&str; 3] = ["Buy milk", "Clean room", "Go to the gym"];

    /// Render of [`today_list`] before any item is marked done
    pub const TODAY_RENDER: &str =
        "---- Today ----\n[ ] Buy milk\n[ ] Clean room\n[ ] Go to the gym\n";

    /// A list titled "Today" holding three undone items
    #[must_use]
    pub fn today_list() -> ItemList {
        ItemList::with_items("Today", TODAY_TITLES.into_iter().map(Item::shared))
    }
}

/// Test helpers and utilities
pub mod helpers {
    /// Install a tracing subscriber that writes through the test harness
    ///
    /// Honors `RUST_LOG`. Safe to call from every test; only the first call
    /// installs the subscriber.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::prelude::*;
    use todolist_core::{Item, ItemList, SharedItem};

    /// Printable, single-line titles (possibly empty)
    pub fn arb_title() -> impl Strategy<Value = String> {
        "[A-Za-z0-9 ,.'!-]{0,24}"
    }

    /// Fresh items in either state
    pub fn arb_item() -> impl Strategy<Value = SharedItem> {
        (arb_title(), any::<bool>()).prop_map(|(title, done)| {
            let item = Item::shared(title);
            if done {
                item.mark_done();
            }
            item
        })
    }

    /// Lists of up to `max_len` fresh items
    pub fn arb_list(max_len: usize) -> impl Strategy<Value = ItemList> {
        (arb_title(), prop::collection::vec(arb_item(), 0..=max_len))
            .prop_map(|(title, items)| ItemList::with_items(title, items))
    }
}
