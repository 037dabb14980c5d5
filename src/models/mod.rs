//! API resource models
//!
//! Every model converts between the API's JSON wire form and a typed value:
//! - [`FromRecord`] builds a model from one raw record, strictly
//! - [`Arrayable`] renders the full representation, every known field included
//! - [`ApiModel`] renders the outbound representation sent in request bodies
//! - [`TypedCollection`] builds an ordered collection of models from a raw
//!   array, leniently dropping malformed rows
//!
//! Strictness sits on the model and leniency on the collection: a bad row in a
//! batch is skipped, but a row that looks like a record and lacks its
//! identifying field fails with [`ModelError::MissingRequiredField`].

pub mod config;
pub mod custom_fields;
pub mod error;
pub mod field;
pub mod segment;

pub use config::{MalformedRecordPolicy, ParseConfig, ParseConfigBuilder};
pub use custom_fields::{
    ChainedList, ChainedLists, CustomFieldValue, CustomFieldValueCollection,
    CustomFieldValuesModel,
};
pub use error::ModelError;
pub use field::Field;
pub use segment::Segment;

use crate::support::raw::value_kind;
use crate::support::{Collection, CollectionKey, RawInput, RawRecord};
use serde_json::Value;
use tracing::debug;

/// Full representation of a model or collection
pub trait Arrayable {
    /// Render every known field; unset fields are `null`
    fn to_array(&self) -> Value;
}

/// Construction from a raw record
pub trait FromRecord: Sized {
    /// Build the model from a decoded JSON object
    fn from_record(record: &RawRecord) -> Result<Self, ModelError>;

    /// Build the model from any decoded value
    ///
    /// Objects and the empty array are accepted; other shapes fail with
    /// [`CollectionError::InvalidInputKind`](crate::support::CollectionError::InvalidInputKind).
    fn from_array(raw: &Value) -> Result<Self, ModelError> {
        RawInput::classify(raw).into_record()?.with(Self::from_record)
    }
}

/// Outbound representation of a model
pub trait ApiModel: Arrayable {
    /// Render the fields to send to the API, leaving unset ones out
    ///
    /// `request_id` is the caller's request counter. Models that tag their
    /// payload with a request identifier take it from here on first use.
    fn to_api(&mut self, request_id: Option<i64>) -> Value;

    /// Related entities that can be requested alongside this model
    fn available_with() -> &'static [&'static str] {
        &[]
    }
}

/// Ordered collection of models built from a raw array
pub trait TypedCollection: Sized {
    /// Model stored in the collection
    type Item: Arrayable;

    /// Name used in logs
    const NAME: &'static str;

    fn from_collection(items: Collection<Self::Item>) -> Self;

    fn items(&self) -> &Collection<Self::Item>;

    /// Full representation: every item rendered with [`Arrayable::to_array`],
    /// keyed like the collection
    fn to_array(&self) -> Value {
        self.items().to_value_with(Arrayable::to_array)
    }

    /// Key under which a record's model is stored; `None` appends
    fn record_key(record: &RawRecord) -> Option<CollectionKey>;

    /// Build the model for a record that passed the shape filter
    fn build_item(record: &RawRecord) -> Result<Self::Item, ModelError>;

    /// Build the collection with the default, lenient configuration
    fn from_array(items: &Value) -> Result<Self, ModelError> {
        Self::from_array_with(items, &ParseConfig::default())
    }

    /// Build the collection from a raw array (or the values of a raw object)
    ///
    /// Entries that are not non-empty objects are handled according to
    /// `config`. Keyed records overwrite earlier ones with the same key.
    fn from_array_with(items: &Value, config: &ParseConfig) -> Result<Self, ModelError> {
        let entries = RawInput::classify(items).entries()?;
        let mut collection = Collection::new();
        let mut skipped = 0usize;

        for (position, entry) in entries.into_iter().enumerate() {
            let record = match entry {
                Value::Object(record) if !record.is_empty() => record,
                other => {
                    let found = entry_kind(other);
                    match config.malformed_records {
                        MalformedRecordPolicy::Skip => {
                            debug!(collection = Self::NAME, position, found, "Skipping malformed record");
                            skipped += 1;
                            continue;
                        }
                        MalformedRecordPolicy::Reject => {
                            return Err(ModelError::MalformedRecord { position, found });
                        }
                    }
                }
            };

            let item = Self::build_item(record)?;
            match Self::record_key(record) {
                Some(key) => {
                    collection.insert(key, item);
                }
                None => {
                    collection.push(item)?;
                }
            }
        }

        debug!(
            collection = Self::NAME,
            parsed = collection.len(),
            skipped,
            "Parsed collection"
        );
        Ok(Self::from_collection(collection))
    }

    /// Decode a JSON document and build the collection from it
    fn from_json(json: &str) -> Result<Self, ModelError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_array(&value)
    }
}

fn entry_kind(entry: &Value) -> &'static str {
    match entry {
        Value::Object(_) => "empty object",
        other => value_kind(other),
    }
}
