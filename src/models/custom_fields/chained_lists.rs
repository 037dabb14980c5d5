//! Chained list models
//!
//! A chained list links a catalog to a parent catalog so that picking an
//! element in the parent narrows the choice in the child.

use crate::models::{Arrayable, FromRecord, ModelError, TypedCollection};
use crate::support::coerce::{int_value, string_value};
use crate::support::{Collection, CollectionKey, RawRecord};
use serde::{Serialize, Serializer};
use serde_json::{Value, json};
use std::ops::{Deref, DerefMut};

/// One link of a chained list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainedList {
    pub catalog_id: i64,
    /// Parent catalog; the API sends `0` or nothing for a root list
    pub parent_catalog_id: Option<i64>,
    pub title: String,
}

impl ChainedList {
    pub fn new(catalog_id: i64, parent_catalog_id: Option<i64>, title: impl Into<String>) -> Self {
        Self {
            catalog_id,
            parent_catalog_id,
            title: title.into(),
        }
    }
}

impl FromRecord for ChainedList {
    /// Never fails: missing ids coerce to `0` and a missing title to `""`
    fn from_record(record: &RawRecord) -> Result<Self, ModelError> {
        let catalog_id = record.get("catalog_id").map(int_value).unwrap_or(0);
        let parent_catalog_id = record
            .get("parent_catalog_id")
            .map(int_value)
            .filter(|id| *id != 0);
        let title = record.get("title").map(string_value).unwrap_or_default();

        Ok(Self::new(catalog_id, parent_catalog_id, title))
    }
}

impl Arrayable for ChainedList {
    fn to_array(&self) -> Value {
        json!({
            "catalog_id": self.catalog_id,
            "parent_catalog_id": self.parent_catalog_id,
            "title": self.title,
        })
    }
}

impl Serialize for ChainedList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}

/// Chained lists of a custom field, keyed by catalog id
///
/// # Example
///
/// ```rust
/// use amocrm_sdk::models::{ChainedLists, TypedCollection};
/// use serde_json::json;
///
/// let lists = ChainedLists::from_array(&json!([
///     {"catalog_id": 5, "title": "Cities"},
///     {"catalog_id": "7", "parent_catalog_id": 5, "title": "Streets"},
/// ]))
/// .unwrap();
///
/// assert_eq!(lists.len(), 2);
/// assert_eq!(lists.get(7).unwrap().parent_catalog_id, Some(5));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChainedLists {
    items: Collection<ChainedList>,
}

impl ChainedLists {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a chained list under its catalog id, replacing any previous one
    pub fn add(&mut self, list: ChainedList) -> Option<ChainedList> {
        self.items.insert(list.catalog_id, list)
    }
}

impl TypedCollection for ChainedLists {
    type Item = ChainedList;

    const NAME: &'static str = "chained_lists";

    fn from_collection(items: Collection<ChainedList>) -> Self {
        Self { items }
    }

    fn items(&self) -> &Collection<ChainedList> {
        &self.items
    }

    fn record_key(record: &RawRecord) -> Option<CollectionKey> {
        let catalog_id = record.get("catalog_id").map(int_value).unwrap_or(0);
        Some(CollectionKey::Index(catalog_id))
    }

    fn build_item(record: &RawRecord) -> Result<ChainedList, ModelError> {
        ChainedList::from_record(record)
    }
}

impl Serialize for ChainedLists {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}

impl Deref for ChainedLists {
    type Target = Collection<ChainedList>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl DerefMut for ChainedLists {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}
