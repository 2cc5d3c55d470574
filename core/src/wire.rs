//! Serialized forms of items and lists
//!
//! This is the one place untyped input can become an [`Item`], so it is the
//! one place that can reject a value for not being an item.
//!
//! ```json
//! { "title": "Today", "items": [ { "title": "Buy milk", "done": false } ] }
//! ```

use crate::error::{ListError, Result};
use crate::item::{Item, SharedItem};
use crate::list::ItemList;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Wire form of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemRecord {
    /// Item title
    pub title: String,
    /// Whether the item is done
    #[serde(default)]
    pub done: bool,
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        Self {
            title: item.title().to_string(),
            done: item.is_done(),
        }
    }
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        let item = Self::new(record.title);
        if record.done {
            item.mark_done();
        }
        item
    }
}

/// Wire form of a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListRecord {
    /// List title
    pub title: String,
    /// Items, in order
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

impl From<&ItemList> for ListRecord {
    fn from(list: &ItemList) -> Self {
        Self {
            title: list.title().to_string(),
            items: list.iter().map(|item| ItemRecord::from(&**item)).collect(),
        }
    }
}

impl From<ListRecord> for ItemList {
    fn from(record: ListRecord) -> Self {
        Self::with_items(
            record.title,
            record
                .items
                .into_iter()
                .map(|item| SharedItem::new(item.into())),
        )
    }
}

impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        ItemRecord::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        ItemRecord::deserialize(deserializer).map(Self::from)
    }
}

impl Serialize for ItemList {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        ListRecord::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ItemList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        ListRecord::deserialize(deserializer).map(Self::from)
    }
}

impl Item {
    /// Builds an item from an untyped JSON value
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidArgument`] unless `value` is an object
    /// with a string `title`, an optional boolean `done`, and nothing else.
    pub fn from_value(value: &Value) -> Result<SharedItem> {
        ItemRecord::deserialize(value)
            .map(|record| SharedItem::new(record.into()))
            .map_err(|e| {
                tracing::debug!(error = %e, "Rejected non-item value");
                ListError::invalid_argument(format!("item must be an Item object: {e}"))
            })
    }
}

impl ItemList {
    /// Appends an item built from an untyped JSON value
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidArgument`] if `value` is not an item; the
    /// list is left unchanged.
    pub fn add_value(&mut self, value: &Value) -> Result<SharedItem> {
        let item = Item::from_value(value)?;
        self.add(SharedItem::clone(&item));
        Ok(item)
    }

    /// Parses a whole list from JSON text
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidArgument`] if `json` is not a list.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| ListError::invalid_argument(format!("list must be an ItemList object: {e}")))
    }
}
