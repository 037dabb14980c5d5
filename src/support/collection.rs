//! Ordered collection
//!
//! An insertion-ordered map from [`CollectionKey`] to values with array-style
//! access: entries can be appended without a key, addressed by an integer or
//! string key, overwritten in place and removed. Removal never compacts the
//! remaining keys and never lets an auto-assigned key be reused.

use super::raw::{RawInput, value_kind};
use super::{CollectionError, CollectionKey};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{Map, Value};

/// Iterator over `(key, value)` pairs in insertion order
pub type Iter<'a, V> = indexmap::map::Iter<'a, CollectionKey, V>;
/// Mutable iterator over `(key, value)` pairs in insertion order
pub type IterMut<'a, V> = indexmap::map::IterMut<'a, CollectionKey, V>;

/// Insertion-ordered collection with array-style keys
///
/// # Example
///
/// ```rust
/// use amocrm_sdk::support::Collection;
///
/// let mut collection = Collection::new();
/// collection.push("a").unwrap();
/// collection.push("b").unwrap();
/// collection.insert("name", "c");
///
/// assert_eq!(collection.len(), 3);
/// assert_eq!(collection.get(1).unwrap(), &"b");
/// assert!(collection.has("name"));
/// ```
#[derive(Debug, Clone)]
pub struct Collection<V> {
    items: IndexMap<CollectionKey, V>,
    /// `None` once `i64::MAX` has been used as a key
    next_index: Option<i64>,
}

/// Entries and their order are compared; the next free key is not.
impl<V: PartialEq> PartialEq for Collection<V> {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len() && self.items.iter().eq(other.items.iter())
    }
}

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Collection<V> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
            next_index: Some(0),
        }
    }

    /// Build a collection from values, keyed `0..n`
    pub fn from_values(values: impl IntoIterator<Item = V>) -> Self {
        values
            .into_iter()
            .enumerate()
            .map(|(position, value)| (CollectionKey::from(position), value))
            .collect()
    }

    /// Value stored under `key`
    pub fn get(&self, key: impl Into<CollectionKey>) -> Result<&V, CollectionError> {
        let key = key.into();
        match self.items.get(&key) {
            Some(value) => Ok(value),
            None => Err(CollectionError::KeyNotFound(key)),
        }
    }

    /// Mutable reference to the value stored under `key`
    pub fn get_mut(&mut self, key: impl Into<CollectionKey>) -> Result<&mut V, CollectionError> {
        let key = key.into();
        match self.items.get_mut(&key) {
            Some(value) => Ok(value),
            None => Err(CollectionError::KeyNotFound(key)),
        }
    }

    /// Append a value under the next free integer key and return that key
    ///
    /// Fails with [`CollectionError::NextKeyOccupied`] once `i64::MAX` has
    /// been used as a key; existing entries are never overwritten.
    pub fn push(&mut self, value: V) -> Result<CollectionKey, CollectionError> {
        let key = CollectionKey::Index(self.next_index.ok_or(CollectionError::NextKeyOccupied)?);
        self.insert(key.clone(), value);
        Ok(key)
    }

    /// Insert or overwrite the value under `key`
    ///
    /// Overwriting keeps the entry at its original position. Returns the
    /// previous value, if any.
    pub fn insert(&mut self, key: impl Into<CollectionKey>, value: V) -> Option<V> {
        let key = key.into();
        if let CollectionKey::Index(index) = &key
            && let Some(next) = self.next_index
            && *index >= next
        {
            self.next_index = index.checked_add(1);
        }
        self.items.insert(key, value)
    }

    /// Array-style assignment: append when `key` is `None`, otherwise insert
    pub fn set(&mut self, key: Option<CollectionKey>, value: V) -> Result<CollectionKey, CollectionError> {
        match key {
            Some(key) => {
                self.insert(key.clone(), value);
                Ok(key)
            }
            None => self.push(value),
        }
    }

    /// Whether an entry exists under `key`
    pub fn has(&self, key: impl Into<CollectionKey>) -> bool {
        self.items.contains_key(&key.into())
    }

    /// Remove the entry under `key`, keeping the order of the others
    ///
    /// Removing an absent key is a no-op.
    pub fn remove(&mut self, key: impl Into<CollectionKey>) -> Option<V> {
        self.items.shift_remove(&key.into())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> Iter<'_, V> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        self.items.iter_mut()
    }

    pub fn keys(&self) -> impl Iterator<Item = &CollectionKey> {
        self.items.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.items.values()
    }

    /// First entry in insertion order
    pub fn first(&self) -> Option<(&CollectionKey, &V)> {
        self.items.first()
    }

    /// Whether the keys are exactly `0..len` in order
    ///
    /// Such a collection is encoded as a JSON array, any other as an object.
    pub fn is_list(&self) -> bool {
        self.items
            .keys()
            .zip(0i64..)
            .all(|(key, position)| *key == CollectionKey::Index(position))
    }

    /// Render the collection as JSON, mapping each value with `f`
    pub fn to_value_with(&self, mut f: impl FnMut(&V) -> Value) -> Value {
        if self.is_list() {
            Value::Array(self.items.values().map(f).collect())
        } else {
            let mut map = Map::with_capacity(self.items.len());
            for (key, value) in &self.items {
                map.insert(key.to_string(), f(value));
            }
            Value::Object(map)
        }
    }
}

impl Collection<Value> {
    /// Build an untyped collection from decoded JSON
    ///
    /// Arrays are keyed `0..n`, objects keep their keys. Any other value
    /// fails with [`CollectionError::InvalidInputKind`].
    pub fn from_raw(value: &Value) -> Result<Self, CollectionError> {
        match RawInput::classify(value) {
            RawInput::List(items) => Ok(Self::from_values(items.iter().cloned())),
            RawInput::Record(record) => Ok(record
                .iter()
                .map(|(key, value)| (CollectionKey::parse(key), value.clone()))
                .collect()),
            RawInput::Scalar(other) => Err(CollectionError::InvalidInputKind {
                expected: "array or object",
                found: value_kind(other),
            }),
        }
    }

    /// Render back to JSON
    pub fn to_value(&self) -> Value {
        self.to_value_with(Clone::clone)
    }
}

impl TryFrom<Value> for Collection<Value> {
    type Error = CollectionError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_raw(&value)
    }
}

impl<K: Into<CollectionKey>, V> FromIterator<(K, V)> for Collection<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<K: Into<CollectionKey>, V> Extend<(K, V)> for Collection<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V> IntoIterator for Collection<V> {
    type Item = (CollectionKey, V);
    type IntoIter = indexmap::map::IntoIter<CollectionKey, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Collection<V> {
    type Item = (&'a CollectionKey, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut Collection<V> {
    type Item = (&'a CollectionKey, &'a mut V);
    type IntoIter = IterMut<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<V: Serialize> Serialize for Collection<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.items.len()))?;
            for value in self.items.values() {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.items.len()))?;
            for (key, value) in &self.items {
                map.serialize_entry(&key.to_string(), value)?;
            }
            map.end()
        }
    }
}
