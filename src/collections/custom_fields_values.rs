//! Collection of custom field values attached to an entity

use crate::models::{ApiModel, CustomFieldValuesModel, FromRecord, ModelError, TypedCollection};
use crate::support::{Collection, CollectionKey, RawRecord};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::ops::{Deref, DerefMut};

/// Custom fields of an entity, in the order the API sent them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomFieldsValuesCollection {
    items: Collection<CustomFieldValuesModel>,
}

impl CustomFieldsValuesCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field entry with the given field id
    pub fn get_by_field_id(&self, field_id: i64) -> Option<&CustomFieldValuesModel> {
        self.items
            .values()
            .find(|model| model.field_id.get() == Some(&field_id))
    }

    /// Field entry with the given field code
    pub fn get_by_field_code(&self, field_code: &str) -> Option<&CustomFieldValuesModel> {
        self.items
            .values()
            .find(|model| model.field_code.get().map(String::as_str) == Some(field_code))
    }

    /// Outbound representation of every field entry
    pub fn to_api(&mut self) -> Value {
        let mut payload = Vec::with_capacity(self.items.len());
        for (_, model) in self.items.iter_mut() {
            payload.push(model.to_api(None));
        }
        Value::Array(payload)
    }
}

impl TypedCollection for CustomFieldsValuesCollection {
    type Item = CustomFieldValuesModel;

    const NAME: &'static str = "custom_fields_values";

    fn from_collection(items: Collection<CustomFieldValuesModel>) -> Self {
        Self { items }
    }

    fn items(&self) -> &Collection<CustomFieldValuesModel> {
        &self.items
    }

    fn record_key(_record: &RawRecord) -> Option<CollectionKey> {
        None
    }

    fn build_item(record: &RawRecord) -> Result<CustomFieldValuesModel, ModelError> {
        CustomFieldValuesModel::from_record(record)
    }
}

impl Serialize for CustomFieldsValuesCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}

impl Deref for CustomFieldsValuesCollection {
    type Target = Collection<CustomFieldValuesModel>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl DerefMut for CustomFieldsValuesCollection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}
