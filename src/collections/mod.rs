//! Typed collections of API models
//!
//! Collections whose items are full API entities (as opposed to the small
//! value collections nested inside a single model).

pub mod custom_fields_values;
pub mod segments;

pub use custom_fields_values::CustomFieldsValuesCollection;
pub use segments::SegmentsCollection;
