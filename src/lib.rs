//! amoCRM SDK - typed resource models for the amoCRM REST API
//!
//! Provides:
//! - An insertion-ordered collection with array-style keys ([`support::Collection`])
//! - Conversion of raw API records into typed models and back
//! - Full (`to_array`) and outbound (`to_api`) JSON representations
//!
//! HTTP transport, authentication and pagination live outside this crate;
//! it only turns decoded JSON into models and models into JSON.

pub mod collections;
pub mod models;
pub mod support;

// Re-export commonly used types
pub use support::{Collection, CollectionError, CollectionKey, RawInput, RawRecord};

pub use models::{
    ApiModel, Arrayable, Field, FromRecord, MalformedRecordPolicy, ModelError, ParseConfig,
    TypedCollection,
};

// Re-export models
pub use models::{
    ChainedList, ChainedLists, CustomFieldValue, CustomFieldValueCollection,
    CustomFieldValuesModel, Segment,
};

// Re-export collections
pub use collections::{CustomFieldsValuesCollection, SegmentsCollection};
