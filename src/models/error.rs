//! Error types for model construction

use crate::support::CollectionError;
use crate::support::RawRecord;
use thiserror::Error;

/// Errors that can occur while building models from API data
#[derive(Error, Debug)]
pub enum ModelError {
    /// The identifying field of a model is absent or blank
    #[error("{model} {field} is empty in {record}")]
    MissingRequiredField {
        model: &'static str,
        field: &'static str,
        /// The offending raw record, JSON-encoded
        record: String,
    },

    /// A batch entry is not a non-empty object and the parse config rejects such entries
    #[error("Malformed record at position {position}: expected a non-empty object, found {found}")]
    MalformedRecord { position: usize, found: &'static str },

    #[error(transparent)]
    Collection(#[from] CollectionError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ModelError {
    pub(crate) fn missing_field(model: &'static str, field: &'static str, record: &RawRecord) -> Self {
        ModelError::MissingRequiredField {
            model,
            field,
            record: serde_json::Value::Object(record.clone()).to_string(),
        }
    }

    /// Whether the error came from input of the wrong shape
    pub fn is_invalid_input_kind(&self) -> bool {
        matches!(self, ModelError::Collection(CollectionError::InvalidInputKind { .. }))
    }
}
