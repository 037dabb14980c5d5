//! Customer segment model
//!
//! Segments group customers; they carry a display color, a cached customer
//! count and their own custom field values.

use crate::collections::CustomFieldsValuesCollection;
use crate::models::field::{int_field, non_blank_int_field, string_field};
use crate::models::{ApiModel, Arrayable, Field, FromRecord, ModelError, TypedCollection};
use crate::support::RawRecord;
use crate::support::coerce::{int_value, is_blank};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};
use tracing::trace;

/// Customer segment
///
/// # Example
///
/// ```rust
/// use amocrm_sdk::models::{ApiModel, Arrayable, FromRecord, Segment};
/// use serde_json::json;
///
/// let mut segment = Segment::from_array(&json!({"id": 12, "name": "VIP", "color": "ff0000"})).unwrap();
///
/// assert_eq!(segment.to_array()["customers_count"], json!(null));
/// assert_eq!(
///     segment.to_api(Some(0)),
///     json!({"id": 12, "name": "VIP", "color": "ff0000", "request_id": 1})
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub id: i64,
    pub name: Field<String>,
    pub color: Field<String>,
    /// Unix timestamp, read-only
    pub created_at: Field<i64>,
    /// Unix timestamp, read-only
    pub updated_at: Field<i64>,
    /// Read-only
    pub customers_count: Field<i64>,
    /// Price type ids as the API sent them, list or keyed object
    pub available_products_price_types: Field<Value>,
    pub custom_fields_values: Field<CustomFieldsValuesCollection>,
    request_id: Option<i64>,
}

impl Segment {
    /// Create a segment with only its id set
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: Field::Unset,
            color: Field::Unset,
            created_at: Field::Unset,
            updated_at: Field::Unset,
            customers_count: Field::Unset,
            available_products_price_types: Field::Unset,
            custom_fields_values: Field::Unset,
            request_id: None,
        }
    }

    /// Request identifier assigned by [`ApiModel::to_api`] or set explicitly
    pub fn request_id(&self) -> Option<i64> {
        self.request_id
    }

    pub fn set_request_id(&mut self, request_id: Option<i64>) {
        self.request_id = request_id;
    }

    pub fn created_at_datetime(&self) -> Option<DateTime<Utc>> {
        self.created_at
            .get()
            .and_then(|timestamp| DateTime::from_timestamp(*timestamp, 0))
    }

    pub fn updated_at_datetime(&self) -> Option<DateTime<Utc>> {
        self.updated_at
            .get()
            .and_then(|timestamp| DateTime::from_timestamp(*timestamp, 0))
    }

    pub fn set_created_at_datetime(&mut self, at: DateTime<Utc>) {
        self.created_at.set(at.timestamp());
    }

    pub fn set_updated_at_datetime(&mut self, at: DateTime<Utc>) {
        self.updated_at.set(at.timestamp());
    }
}

impl FromRecord for Segment {
    /// Fails with [`ModelError::MissingRequiredField`] when `id` is absent or blank
    fn from_record(record: &RawRecord) -> Result<Self, ModelError> {
        let id = match record.get("id") {
            Some(id) if !is_blank(id) => int_value(id),
            _ => return Err(ModelError::missing_field("Segment", "id", record)),
        };

        let mut segment = Segment::new(id);
        segment.name = string_field(record, "name");
        segment.color = string_field(record, "color");
        segment.created_at = non_blank_int_field(record, "created_at");
        segment.updated_at = non_blank_int_field(record, "updated_at");
        segment.customers_count = int_field(record, "customers_count");

        if let Some(price_types) = record.get("available_products_price_types")
            && !is_blank(price_types)
        {
            segment.available_products_price_types = Field::Set(price_types.clone());
        }

        if let Some(values) = record.get("custom_fields_values")
            && !is_blank(values)
        {
            segment.custom_fields_values =
                Field::Set(CustomFieldsValuesCollection::from_array(values)?);
        }

        Ok(segment)
    }
}

impl Arrayable for Segment {
    fn to_array(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name.to_value(),
            "color": self.color.to_value(),
            "created_at": self.created_at.to_value(),
            "updated_at": self.updated_at.to_value(),
            "customers_count": self.customers_count.to_value(),
            "available_products_price_types": self.available_products_price_types.to_value(),
            "custom_fields_values": self
                .custom_fields_values
                .get()
                .map_or(Value::Null, TypedCollection::to_array),
        })
    }
}

impl ApiModel for Segment {
    /// Read-only fields are never sent. `request_id` is always present.
    ///
    /// The first call with a counter assigns `counter + 1` as the request id:
    /// the API rejects a request id of `0`. Once assigned, the id is kept.
    fn to_api(&mut self, request_id: Option<i64>) -> Value {
        let mut result = Map::new();
        result.insert("id".to_string(), Value::from(self.id));

        if let Some(name) = self.name.to_api_value() {
            result.insert("name".to_string(), name);
        }
        if let Some(color) = self.color.to_api_value() {
            result.insert("color".to_string(), color);
        }
        if let Some(price_types) = self.available_products_price_types.to_api_value() {
            result.insert("available_products_price_types".to_string(), price_types);
        }
        match &mut self.custom_fields_values {
            Field::Unset => {}
            Field::Null => {
                result.insert("custom_fields_values".to_string(), Value::Null);
            }
            Field::Set(values) => {
                result.insert("custom_fields_values".to_string(), values.to_api());
            }
        }

        if self.request_id.is_none()
            && let Some(counter) = request_id
        {
            let assigned = counter.saturating_add(1);
            trace!(segment_id = self.id, request_id = assigned, "Assigned request id");
            self.request_id = Some(assigned);
        }
        result.insert("request_id".to_string(), Value::from(self.request_id));

        Value::Object(result)
    }
}

impl Serialize for Segment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_is_assigned_once() {
        let mut segment = Segment::new(1);

        let first = segment.to_api(Some(5));
        assert_eq!(first["request_id"], json!(6));
        assert_eq!(segment.request_id(), Some(6));

        let second = segment.to_api(Some(5));
        assert_eq!(second["request_id"], json!(6));

        segment.to_api(Some(40));
        assert_eq!(segment.request_id(), Some(6));
    }

    #[test]
    fn test_request_id_without_counter() {
        let mut segment = Segment::new(1);
        assert_eq!(segment.to_api(None), json!({"id": 1, "request_id": null}));
        assert_eq!(segment.request_id(), None);
    }

    #[test]
    fn test_explicit_null_is_sent() {
        let mut segment = Segment::new(1);
        segment.color.clear();
        segment.name.set("Leads".to_string());
        assert_eq!(
            segment.to_api(Some(0)),
            json!({"id": 1, "name": "Leads", "color": null, "request_id": 1})
        );
    }

    #[test]
    fn test_read_only_fields_are_not_sent() {
        let mut segment = Segment::from_array(&json!({
            "id": 3,
            "created_at": 1700000000,
            "updated_at": 1700000100,
            "customers_count": 0
        }))
        .unwrap();

        let payload = segment.to_api(None);
        assert!(payload.get("created_at").is_none());
        assert!(payload.get("updated_at").is_none());
        assert!(payload.get("customers_count").is_none());
    }

    #[test]
    fn test_keyed_price_types_keep_their_keys() {
        let raw = json!({"id": 1, "available_products_price_types": {"retail": 101, "bulk": 102}});
        let mut segment = Segment::from_array(&raw).unwrap();

        let expected = json!({"retail": 101, "bulk": 102});
        assert_eq!(segment.to_array()["available_products_price_types"], expected);
        assert_eq!(segment.to_api(None)["available_products_price_types"], expected);
        assert_eq!(
            serde_json::to_string(&segment.to_array()["available_products_price_types"]).unwrap(),
            r#"{"retail":101,"bulk":102}"#
        );
    }

    #[test]
    fn test_zero_customers_count_is_kept() {
        let segment = Segment::from_array(&json!({"id": 3, "customers_count": 0})).unwrap();
        assert_eq!(segment.customers_count, Field::Set(0));
    }

    #[test]
    fn test_timestamps() {
        let mut segment = Segment::from_array(&json!({"id": 3, "created_at": 1700000000, "updated_at": 0})).unwrap();
        assert_eq!(segment.updated_at, Field::Unset);
        assert_eq!(
            segment.created_at_datetime().map(|at| at.to_rfc3339()),
            Some("2023-11-14T22:13:20+00:00".to_string())
        );

        let at = DateTime::from_timestamp(1700000500, 0).unwrap();
        segment.set_updated_at_datetime(at);
        assert_eq!(segment.updated_at, Field::Set(1700000500));
        assert_eq!(segment.updated_at_datetime(), Some(at));
    }

    #[test]
    fn test_blank_id_is_rejected() {
        for raw in [json!({}), json!({"id": 0}), json!({"id": ""}), json!({"id": null, "name": "x"}), json!([])] {
            let err = Segment::from_array(&raw).unwrap_err();
            assert!(
                matches!(err, ModelError::MissingRequiredField { model: "Segment", field: "id", .. }),
                "{} should fail with MissingRequiredField",
                raw
            );
        }
    }

    #[test]
    fn test_non_record_input_is_rejected() {
        let err = Segment::from_array(&json!([{"id": 1}])).unwrap_err();
        assert!(err.is_invalid_input_kind());
        assert!(Segment::from_array(&json!(7)).unwrap_err().is_invalid_input_kind());
    }

    #[test]
    fn test_error_message_embeds_record() {
        let err = Segment::from_array(&json!({"name": "VIP"})).unwrap_err();
        assert_eq!(err.to_string(), r#"Segment id is empty in {"name":"VIP"}"#);
    }

    #[test]
    fn test_available_with_is_empty() {
        assert!(Segment::available_with().is_empty());
    }
}
