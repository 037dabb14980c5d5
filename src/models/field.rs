//! Tri-state model fields
//!
//! Outbound payloads must tell "never set" apart from "explicitly null":
//! the full representation writes `null` for both, the outbound one leaves
//! unset fields out and sends explicit nulls so the API clears the value.

use crate::support::RawRecord;
use crate::support::coerce::{int_value, is_blank, string_value};
use serde_json::Value;

/// A model field that is unset, explicitly null, or holds a value
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Field<T> {
    #[default]
    Unset,
    Null,
    Set(T),
}

impl<T> Field<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Field::Unset)
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Field::Set(_))
    }

    /// The value, if one is set
    pub fn get(&self) -> Option<&T> {
        match self {
            Field::Set(value) => Some(value),
            Field::Unset | Field::Null => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Field::Set(value) => Some(value),
            Field::Unset | Field::Null => None,
        }
    }

    pub fn set(&mut self, value: T) {
        *self = Field::Set(value);
    }

    /// Mark the field as explicitly null
    pub fn clear(&mut self) {
        *self = Field::Null;
    }

    /// Forget the field entirely
    pub fn unset(&mut self) {
        *self = Field::Unset;
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Set(value) => Some(value),
            Field::Unset | Field::Null => None,
        }
    }
}

impl<T: Clone + Into<Value>> Field<T> {
    /// Value for the full representation
    pub fn to_value(&self) -> Value {
        match self {
            Field::Set(value) => value.clone().into(),
            Field::Unset | Field::Null => Value::Null,
        }
    }

    /// Value for the outbound representation; `None` when unset
    pub fn to_api_value(&self) -> Option<Value> {
        match self {
            Field::Unset => None,
            Field::Null => Some(Value::Null),
            Field::Set(value) => Some(value.clone().into()),
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    /// `None` maps to an explicit null
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Field::Set(value),
            None => Field::Null,
        }
    }
}

/// Value under `key` unless it is absent or `null`
fn present<'a>(record: &'a RawRecord, key: &str) -> Option<&'a Value> {
    record.get(key).filter(|value| !value.is_null())
}

/// Integer field, set whenever the key holds a non-null value
pub(crate) fn int_field(record: &RawRecord, key: &str) -> Field<i64> {
    present(record, key).map(int_value).into_field()
}

/// Integer field, set only when the key holds a non-blank value
pub(crate) fn non_blank_int_field(record: &RawRecord, key: &str) -> Field<i64> {
    record
        .get(key)
        .filter(|value| !is_blank(value))
        .map(int_value)
        .into_field()
}

/// String field, set whenever the key holds a non-null value
pub(crate) fn string_field(record: &RawRecord, key: &str) -> Field<String> {
    present(record, key).map(string_value).into_field()
}

/// String field, set only when the key holds a non-blank value
pub(crate) fn non_blank_string_field(record: &RawRecord, key: &str) -> Field<String> {
    record
        .get(key)
        .filter(|value| !is_blank(value))
        .map(string_value)
        .into_field()
}

/// Raw JSON field, set whenever the key holds a non-null value
pub(crate) fn value_field(record: &RawRecord, key: &str) -> Field<Value> {
    present(record, key).cloned().into_field()
}

trait IntoField<T> {
    fn into_field(self) -> Field<T>;
}

/// Absence while parsing means "not provided", never an explicit null
impl<T> IntoField<T> for Option<T> {
    fn into_field(self) -> Field<T> {
        match self {
            Some(value) => Field::Set(value),
            None => Field::Unset,
        }
    }
}
