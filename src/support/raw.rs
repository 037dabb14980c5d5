//! Parse boundary for untyped API data
//!
//! Decoded JSON arrives as `serde_json::Value`. Before any typed model is
//! built, the value is classified into one of three shapes so that list- and
//! map-shaped data are never silently mixed up.

use super::CollectionError;
use serde_json::{Map, Value};

/// A raw record: one JSON object as decoded from an API response
pub type RawRecord = Map<String, Value>;

/// Shape of an untyped value at the parse boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInput<'a> {
    /// A JSON object
    Record(&'a RawRecord),
    /// A JSON array
    List(&'a [Value]),
    /// Anything else, including `null`
    Scalar(&'a Value),
}

impl<'a> RawInput<'a> {
    /// Classify a decoded value
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Object(record) => Self::Record(record),
            Value::Array(items) => Self::List(items),
            other => Self::Scalar(other),
        }
    }

    /// Human-readable name of the shape, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Record(_) => "object",
            Self::List(_) => "array",
            Self::Scalar(value) => value_kind(value),
        }
    }

    /// Values of a list or record, in order
    ///
    /// Record keys are discarded. Scalars cannot be iterated and are rejected.
    pub fn entries(self) -> Result<Vec<&'a Value>, CollectionError> {
        match self {
            Self::List(items) => Ok(items.iter().collect()),
            Self::Record(record) => Ok(record.values().collect()),
            Self::Scalar(value) => Err(CollectionError::InvalidInputKind {
                expected: "array or object",
                found: value_kind(value),
            }),
        }
    }

    /// The value as a record
    ///
    /// An empty array counts as an empty record, because upstream encoders
    /// emit `[]` for an empty map. Non-empty arrays and scalars are rejected.
    pub fn into_record(self) -> Result<RecordRef<'a>, CollectionError> {
        match self {
            Self::Record(record) => Ok(RecordRef::Borrowed(record)),
            Self::List([]) => Ok(RecordRef::Empty),
            other => Err(CollectionError::InvalidInputKind {
                expected: "object",
                found: other.kind(),
            }),
        }
    }
}

/// A record obtained from [`RawInput::into_record`]
#[derive(Debug, Clone, Copy)]
pub enum RecordRef<'a> {
    Borrowed(&'a RawRecord),
    Empty,
}

impl RecordRef<'_> {
    /// Run `f` against the record, materializing the empty case
    pub fn with<T>(self, f: impl FnOnce(&RawRecord) -> T) -> T {
        match self {
            Self::Borrowed(record) => f(record),
            Self::Empty => f(&RawRecord::new()),
        }
    }
}

/// JSON type name of a value
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify() {
        assert!(matches!(RawInput::classify(&json!({"a": 1})), RawInput::Record(_)));
        assert!(matches!(RawInput::classify(&json!([1, 2])), RawInput::List(_)));
        assert!(matches!(RawInput::classify(&json!("x")), RawInput::Scalar(_)));
        assert!(matches!(RawInput::classify(&Value::Null), RawInput::Scalar(_)));
    }

    #[test]
    fn test_entries_of_record_keep_order() {
        let value = json!({"b": 1, "a": 2, "c": 3});
        let entries = RawInput::classify(&value).entries().unwrap();
        assert_eq!(entries, vec![&json!(1), &json!(2), &json!(3)]);
    }

    #[test]
    fn test_entries_reject_scalars() {
        let err = RawInput::classify(&json!(42)).entries().unwrap_err();
        assert!(matches!(
            err,
            CollectionError::InvalidInputKind { found: "number", .. }
        ));
    }

    #[test]
    fn test_empty_array_is_an_empty_record() {
        let value = json!([]);
        let len = RawInput::classify(&value)
            .into_record()
            .unwrap()
            .with(|record| record.len());
        assert_eq!(len, 0);
    }

    #[test]
    fn test_non_empty_array_is_not_a_record() {
        let value = json!([{"id": 1}]);
        let err = RawInput::classify(&value).into_record().unwrap_err();
        assert!(matches!(
            err,
            CollectionError::InvalidInputKind { expected: "object", found: "array" }
        ));
    }
}
