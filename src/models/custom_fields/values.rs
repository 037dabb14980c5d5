//! Custom field values
//!
//! Entities carry their custom fields as a list of field entries, each with
//! its own list of values:
//!
//! ```json
//! {"field_id": 3, "field_code": "PHONE", "values": [{"value": "+7 900", "enum_code": "WORK"}]}
//! ```

use crate::models::field::{
    int_field, non_blank_int_field, non_blank_string_field, string_field, value_field,
};
use crate::models::{ApiModel, Arrayable, Field, FromRecord, ModelError, TypedCollection};
use crate::support::coerce::is_blank;
use crate::support::{Collection, CollectionKey, RawRecord};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};
use std::ops::{Deref, DerefMut};

/// A single value of a custom field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomFieldValue {
    pub value: Field<Value>,
    /// Enum option id for select-like fields
    pub enum_id: Field<i64>,
    /// Enum option code (e.g. `WORK` for a phone)
    pub enum_code: Field<String>,
}

impl CustomFieldValue {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: Field::Set(value.into()),
            ..Self::default()
        }
    }

    /// Outbound representation; unset fields are left out
    pub fn to_api(&self) -> Value {
        let mut result = Map::new();
        if let Some(value) = self.value.to_api_value() {
            result.insert("value".to_string(), value);
        }
        if let Some(enum_id) = self.enum_id.to_api_value() {
            result.insert("enum_id".to_string(), enum_id);
        }
        if let Some(enum_code) = self.enum_code.to_api_value() {
            result.insert("enum_code".to_string(), enum_code);
        }
        Value::Object(result)
    }
}

impl FromRecord for CustomFieldValue {
    fn from_record(record: &RawRecord) -> Result<Self, ModelError> {
        Ok(Self {
            value: value_field(record, "value"),
            enum_id: int_field(record, "enum_id"),
            enum_code: string_field(record, "enum_code"),
        })
    }
}

impl Arrayable for CustomFieldValue {
    fn to_array(&self) -> Value {
        json!({
            "value": self.value.to_value(),
            "enum_id": self.enum_id.to_value(),
            "enum_code": self.enum_code.to_value(),
        })
    }
}

impl Serialize for CustomFieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}

/// Values of one custom field, in the order the API sent them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomFieldValueCollection {
    items: Collection<CustomFieldValue>,
}

impl CustomFieldValueCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_api(&self) -> Value {
        self.items.to_value_with(CustomFieldValue::to_api)
    }
}

impl TypedCollection for CustomFieldValueCollection {
    type Item = CustomFieldValue;

    const NAME: &'static str = "custom_field_values";

    fn from_collection(items: Collection<CustomFieldValue>) -> Self {
        Self { items }
    }

    fn items(&self) -> &Collection<CustomFieldValue> {
        &self.items
    }

    fn record_key(_record: &RawRecord) -> Option<CollectionKey> {
        None
    }

    fn build_item(record: &RawRecord) -> Result<CustomFieldValue, ModelError> {
        CustomFieldValue::from_record(record)
    }
}

impl Serialize for CustomFieldValueCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}

impl Deref for CustomFieldValueCollection {
    type Target = Collection<CustomFieldValue>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl DerefMut for CustomFieldValueCollection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

/// One custom field of an entity together with its values
///
/// A field is identified by `field_id` or, for system fields, by
/// `field_code`; a record carrying neither cannot be parsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomFieldValuesModel {
    pub field_id: Field<i64>,
    pub field_code: Field<String>,
    pub field_name: Field<String>,
    pub field_type: Field<String>,
    pub values: CustomFieldValueCollection,
}

impl CustomFieldValuesModel {
    pub fn with_field_id(field_id: i64) -> Self {
        Self {
            field_id: Field::Set(field_id),
            ..Self::default()
        }
    }

    pub fn with_field_code(field_code: impl Into<String>) -> Self {
        Self {
            field_code: Field::Set(field_code.into()),
            ..Self::default()
        }
    }
}

impl FromRecord for CustomFieldValuesModel {
    fn from_record(record: &RawRecord) -> Result<Self, ModelError> {
        let field_id = non_blank_int_field(record, "field_id");
        let field_code = non_blank_string_field(record, "field_code");
        if field_id.is_unset() && field_code.is_unset() {
            return Err(ModelError::missing_field("Custom field", "field_id", record));
        }

        let values = match record.get("values") {
            Some(values) if !is_blank(values) => CustomFieldValueCollection::from_array(values)?,
            _ => CustomFieldValueCollection::new(),
        };

        Ok(Self {
            field_id,
            field_code,
            field_name: string_field(record, "field_name"),
            field_type: string_field(record, "field_type"),
            values,
        })
    }
}

impl Arrayable for CustomFieldValuesModel {
    fn to_array(&self) -> Value {
        json!({
            "field_id": self.field_id.to_value(),
            "field_code": self.field_code.to_value(),
            "field_name": self.field_name.to_value(),
            "field_type": self.field_type.to_value(),
            "values": self.values.to_array(),
        })
    }
}

impl ApiModel for CustomFieldValuesModel {
    /// Field name and type are defined by the field itself and never sent
    fn to_api(&mut self, _request_id: Option<i64>) -> Value {
        let mut result = Map::new();
        if let Some(field_id) = self.field_id.to_api_value() {
            result.insert("field_id".to_string(), field_id);
        }
        if let Some(field_code) = self.field_code.to_api_value() {
            result.insert("field_code".to_string(), field_code);
        }
        result.insert("values".to_string(), self.values.to_api());
        Value::Object(result)
    }
}

impl Serialize for CustomFieldValuesModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}
