//! An ordered collection of shared todo items.
//!
//! [`ItemList`] keeps items in insertion order and addresses them by
//! zero-based position. Queries that can come up empty return `Option`;
//! positional operations validate their index first and fail with
//! [`ListError::OutOfRange`].
//!
//! Derived lists ([`ItemList::filter`], [`ItemList::all_done`],
//! [`ItemList::all_not_done`]) and [`Clone`] are shallow: they hold the same
//! [`SharedItem`] handles as the source list.
//!
//! The list itself needs `&mut` for structural changes. To share one list
//! between threads, put it behind a lock.

use crate::error::{ListError, Result};
use crate::index::ListIndex;
use crate::item::SharedItem;
use std::fmt;

/// An ordered, titled list of todo items
///
/// # Example
///
/// ```
/// use todolist_core::{Item, ItemList};
///
/// let mut list = ItemList::new("Today");
/// list.add(Item::shared("Buy milk"));
/// list.add(Item::shared("Clean room"));
///
/// list.mark_done_at(1)?;
/// assert_eq!(list.to_string(), "---- Today ----\n[ ] Buy milk\n[X] Clean room\n");
/// # Ok::<(), todolist_core::ListError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ItemList {
    title: String,
    items: Vec<SharedItem>,
}

impl ItemList {
    /// Creates an empty list with the given title
    #[must_use]
    pub fn new(title: impl fmt::Display) -> Self {
        Self {
            title: title.to_string(),
            items: Vec::new(),
        }
    }

    /// Creates a list holding the given items, in order
    #[must_use]
    pub fn with_items(
        title: impl fmt::Display,
        items: impl IntoIterator<Item = SharedItem>,
    ) -> Self {
        Self {
            title: title.to_string(),
            items: items.into_iter().collect(),
        }
    }

    /// Returns the list's title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the list's title
    pub fn set_title(&mut self, title: impl fmt::Display) {
        self.title = title.to_string();
    }

    /// Returns the number of items in the list
    #[doc(alias = "size")]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an item to the end of the list
    pub fn add(&mut self, item: SharedItem) {
        tracing::trace!(list = %self.title, title = item.title(), "Adding item");
        self.items.push(item);
    }

    /// Returns the first item, if any
    #[must_use]
    pub fn first(&self) -> Option<SharedItem> {
        self.items.first().cloned()
    }

    /// Returns the last item, if any
    #[must_use]
    pub fn last(&self) -> Option<SharedItem> {
        self.items.last().cloned()
    }

    /// Checks that `index` addresses an item in this list
    ///
    /// Every positional operation goes through this check.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `index` is negative, not a whole
    /// number, or not less than [`len`](Self::len).
    pub fn validate_index<I: ListIndex>(&self, index: I) -> Result<usize> {
        index
            .position()
            .filter(|&position| position < self.items.len())
            .ok_or_else(|| ListError::out_of_range(index))
    }

    /// Returns the item at `index`
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `index` is invalid.
    pub fn item_at<I: ListIndex>(&self, index: I) -> Result<SharedItem> {
        let position = self.validate_index(index)?;
        Ok(SharedItem::clone(&self.items[position]))
    }

    /// Marks the item at `index` as done
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `index` is invalid.
    pub fn mark_done_at<I: ListIndex>(&self, index: I) -> Result<()> {
        self.item_at(index)?.mark_done();
        Ok(())
    }

    /// Marks the item at `index` as not done
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `index` is invalid.
    pub fn mark_undone_at<I: ListIndex>(&self, index: I) -> Result<()> {
        self.item_at(index)?.mark_undone();
        Ok(())
    }

    /// Returns `true` if every item is done (vacuously `true` when empty)
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.items.iter().all(|item| item.is_done())
    }

    /// Removes and returns the first item
    pub fn shift(&mut self) -> Option<SharedItem> {
        if self.items.is_empty() {
            return None;
        }
        let item = self.items.remove(0);
        tracing::trace!(list = %self.title, len = self.items.len(), "Shifted item");
        Some(item)
    }

    /// Removes and returns the last item
    pub fn pop(&mut self) -> Option<SharedItem> {
        let item = self.items.pop()?;
        tracing::trace!(list = %self.title, len = self.items.len(), "Popped item");
        Some(item)
    }

    /// Removes and returns the item at `index`, shifting later items down
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `index` is invalid; the list is
    /// left unchanged.
    pub fn remove_at<I: ListIndex>(&mut self, index: I) -> Result<SharedItem> {
        let position = self.validate_index(index)?;
        let item = self.items.remove(position);
        tracing::trace!(
            list = %self.title,
            index = position,
            len = self.items.len(),
            "Removed item"
        );
        Ok(item)
    }

    /// Calls `f` with each item and its index, in order
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&SharedItem, usize),
    {
        for (index, item) in self.items.iter().enumerate() {
            f(item, index);
        }
    }

    /// Returns a new list with the same title holding the items for which
    /// `predicate` returns `true`
    ///
    /// The new list shares its items with this one.
    #[must_use]
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&SharedItem, usize) -> bool,
    {
        let mut result = Self::new(&self.title);
        self.for_each(|item, index| {
            if predicate(item, index) {
                result.items.push(SharedItem::clone(item));
            }
        });
        result
    }

    /// Returns the first item whose title equals `title`
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<SharedItem> {
        self.items.iter().find(|item| item.title() == title).cloned()
    }

    /// Returns a list of the done items
    #[must_use]
    pub fn all_done(&self) -> Self {
        self.filter(|item, _| item.is_done())
    }

    /// Returns a list of the items that are not done
    #[must_use]
    pub fn all_not_done(&self) -> Self {
        self.filter(|item, _| !item.is_done())
    }

    /// Marks the first item titled `title` as done
    ///
    /// Does nothing if no item has that title.
    pub fn mark_done(&self, title: &str) {
        match self.find_by_title(title) {
            Some(item) => item.mark_done(),
            None => tracing::debug!(list = %self.title, title, "No item with title"),
        }
    }

    /// Marks every item as done
    pub fn mark_all_done(&self) {
        tracing::debug!(
            list = %self.title,
            len = self.items.len(),
            "Marking all items done"
        );
        self.items.iter().for_each(|item| item.mark_done());
    }

    /// Marks every item as not done
    pub fn mark_all_undone(&self) {
        tracing::debug!(
            list = %self.title,
            len = self.items.len(),
            "Marking all items undone"
        );
        self.items.iter().for_each(|item| item.mark_undone());
    }

    /// Returns the items as a new vector of shared handles
    #[doc(alias = "toArray")]
    #[must_use]
    pub fn to_vec(&self) -> Vec<SharedItem> {
        self.items.clone()
    }

    /// Returns an iterator over the items, in order
    pub fn iter(&self) -> std::slice::Iter<'_, SharedItem> {
        self.items.iter()
    }

    /// Renders the list: a `---- <title> ----` header, then one line per item
    ///
    /// Every line, including the last, ends with a newline.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ItemList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---- {} ----", self.title)?;
        for item in &self.items {
            writeln!(f, "{item}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a SharedItem;
    type IntoIter = std::slice::Iter<'a, SharedItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for ItemList {
    type Item = SharedItem;
    type IntoIter = std::vec::IntoIter<SharedItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl Extend<SharedItem> for ItemList {
    fn extend<T: IntoIterator<Item = SharedItem>>(&mut self, iter: T) {
        for item in iter {
            self.add(item);
        }
    }
}

impl FromIterator<SharedItem> for ItemList {
    fn from_iter<T: IntoIterator<Item = SharedItem>>(iter: T) -> Self {
        Self::with_items("", iter)
    }
}

impl From<ItemList> for Vec<SharedItem> {
    fn from(list: ItemList) -> Self {
        list.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use std::sync::Arc;

    fn today() -> (ItemList, [SharedItem; 3]) {
        let items = [
            Item::shared("Buy milk"),
            Item::shared("Clean room"),
            Item::shared("Go to the gym"),
        ];
        let list = ItemList::with_items("Today", items.iter().cloned());
        (list, items)
    }

    #[test]
    fn new_list_is_empty() {
        let list = ItemList::new("Today");
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.title(), "Today");
        assert!(list.first().is_none());
        assert!(list.last().is_none());
    }

    #[test]
    fn add_appends_in_order() {
        let (list, items) = today();
        assert_eq!(list.len(), 3);
        assert!(Item::same(&list.first().unwrap(), &items[0]));
        assert!(Item::same(&list.last().unwrap(), &items[2]));
    }

    #[test]
    fn add_allows_duplicate_titles_and_handles() {
        let mut list = ItemList::new("Dupes");
        let item = Item::shared("Buy milk");
        list.add(Arc::clone(&item));
        list.add(Arc::clone(&item));
        list.add(Item::shared("Buy milk"));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn item_at_returns_shared_handle() {
        let (list, items) = today();
        assert!(Item::same(&list.item_at(1).unwrap(), &items[1]));
        assert!(Item::same(&list.item_at(2_i64).unwrap(), &items[2]));
        assert!(Item::same(&list.item_at(0.0).unwrap(), &items[0]));
    }

    #[test]
    fn item_at_rejects_bad_indexes() {
        let (list, _) = today();
        assert_eq!(list.item_at(-1).unwrap_err(), ListError::out_of_range(-1));
        assert_eq!(list.item_at(3).unwrap_err(), ListError::out_of_range(3));
        assert_eq!(list.item_at(10).unwrap_err(), ListError::out_of_range(10));
        assert_eq!(list.item_at(0.5).unwrap_err(), ListError::out_of_range(0.5));
        assert!(ItemList::new("Empty").item_at(0).is_err());
    }

    #[test]
    fn validate_index_bounds() {
        let (list, _) = today();
        assert_eq!(list.validate_index(0), Ok(0));
        assert_eq!(list.validate_index(2), Ok(2));
        assert_eq!(list.validate_index(3), Err(ListError::out_of_range(3)));
        assert_eq!(list.validate_index(-1), Err(ListError::out_of_range(-1)));
        assert_eq!(list.validate_index(1.5), Err(ListError::out_of_range(1.5)));

        let empty = ItemList::new("Empty");
        assert_eq!(empty.validate_index(0), Err(ListError::out_of_range(0)));
    }

    #[test]
    fn mark_at_updates_the_item() {
        let (list, items) = today();
        list.mark_done_at(1).unwrap();
        assert!(items[1].is_done());
        assert!(!items[0].is_done());

        list.mark_undone_at(1).unwrap();
        assert!(!items[1].is_done());
    }

    #[test]
    fn mark_at_rejects_bad_indexes() {
        let (list, _) = today();
        assert_eq!(list.mark_done_at(3), Err(ListError::out_of_range(3)));
        assert_eq!(list.mark_undone_at(-1), Err(ListError::out_of_range(-1)));
    }

    #[test]
    fn is_done_requires_every_item() {
        assert!(ItemList::new("Empty").is_done());

        let (list, items) = today();
        assert!(!list.is_done());
        items[0].mark_done();
        items[1].mark_done();
        assert!(!list.is_done());
        items[2].mark_done();
        assert!(list.is_done());
    }

    #[test]
    fn shift_and_pop_take_from_the_ends() {
        let (mut list, items) = today();

        assert!(Item::same(&list.shift().unwrap(), &items[0]));
        assert!(Item::same(&list.pop().unwrap(), &items[2]));
        assert_eq!(list.len(), 1);
        assert!(Item::same(&list.first().unwrap(), &items[1]));

        assert!(list.pop().is_some());
        assert!(list.shift().is_none());
        assert!(list.pop().is_none());
    }

    #[test]
    fn remove_at_closes_the_gap() {
        let (mut list, items) = today();
        let removed = list.remove_at(1).unwrap();
        assert!(Item::same(&removed, &items[1]));
        assert_eq!(list.len(), 2);
        assert!(Item::same(&list.item_at(1).unwrap(), &items[2]));
    }

    #[test]
    fn remove_at_rejects_bad_index_without_changes() {
        let (mut list, _) = today();
        assert_eq!(list.remove_at(3).unwrap_err(), ListError::out_of_range(3));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn for_each_visits_in_index_order() {
        let (mut list, _) = today();
        list.shift();

        let mut seen = Vec::new();
        list.for_each(|item, index| seen.push((index, item.title().to_string())));
        assert_eq!(
            seen,
            vec![(0, "Clean room".to_string()), (1, "Go to the gym".to_string())]
        );
    }

    #[test]
    fn filter_shares_items_and_keeps_title() {
        let (list, items) = today();
        let odd = list.filter(|_, index| index % 2 == 0);

        assert_eq!(odd.title(), "Today");
        assert_eq!(odd.len(), 2);
        assert!(Item::same(&odd.item_at(0).unwrap(), &items[0]));
        assert!(Item::same(&odd.item_at(1).unwrap(), &items[2]));

        odd.mark_done_at(1).unwrap();
        assert!(list.item_at(2).unwrap().is_done());
    }

    #[test]
    fn find_by_title_returns_first_match() {
        let mut list = ItemList::new("Today");
        let first = Item::shared("Buy milk");
        let second = Item::shared("Buy milk");
        list.add(Arc::clone(&first));
        list.add(Arc::clone(&second));

        let found = list.find_by_title("Buy milk").unwrap();
        assert!(Item::same(&found, &first));
        assert!(!Item::same(&found, &second));
        assert!(list.find_by_title("buy milk").is_none());
    }

    #[test]
    fn all_done_and_all_not_done_partition() {
        let (list, items) = today();
        items[1].mark_done();

        let done = list.all_done();
        let not_done = list.all_not_done();
        assert_eq!(done.len(), 1);
        assert!(Item::same(&done.first().unwrap(), &items[1]));
        assert_eq!(not_done.len(), 2);
        assert!(Item::same(&not_done.first().unwrap(), &items[0]));
        assert!(Item::same(&not_done.last().unwrap(), &items[2]));
    }

    #[test]
    fn mark_done_by_title() {
        let (list, items) = today();
        list.mark_done("Clean room");
        assert!(items[1].is_done());

        list.mark_done("Walk the dog");
        assert_eq!(list.all_done().len(), 1);
    }

    #[test]
    fn mark_all_done_and_undone() {
        let (list, _) = today();
        list.mark_all_done();
        assert!(list.is_done());
        list.mark_all_undone();
        assert_eq!(list.all_not_done().len(), 3);

        ItemList::new("Empty").mark_all_done();
    }

    #[test]
    fn to_vec_is_independent_of_the_list() {
        let (mut list, items) = today();
        let mut snapshot = list.to_vec();
        snapshot.pop();
        list.shift();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(list.len(), 2);
        assert!(Item::same(&snapshot[0], &items[0]));
    }

    #[test]
    fn render_matches_format() {
        let (list, _) = today();
        assert_eq!(
            list.render(),
            "---- Today ----\n[ ] Buy milk\n[ ] Clean room\n[ ] Go to the gym\n"
        );

        list.mark_done_at(1).unwrap();
        assert_eq!(
            list.to_string(),
            "---- Today ----\n[ ] Buy milk\n[X] Clean room\n[ ] Go to the gym\n"
        );
    }

    #[test]
    fn render_empty_list_is_header_only() {
        assert_eq!(ItemList::new("Empty").render(), "---- Empty ----\n");
    }

    #[test]
    fn set_title_replaces_title() {
        let mut list = ItemList::new("Today");
        list.set_title("Tomorrow");
        assert_eq!(list.title(), "Tomorrow");
    }

    #[test]
    fn collects_and_extends() {
        let (list, items) = today();
        let mut collected: ItemList = list.iter().cloned().collect();
        assert_eq!(collected.title(), "");
        assert_eq!(collected.len(), 3);

        collected.extend([Item::shared("Read a book")]);
        assert_eq!(collected.len(), 4);

        let handles: Vec<SharedItem> = collected.into();
        assert!(Item::same(&handles[0], &items[0]));
    }
}
