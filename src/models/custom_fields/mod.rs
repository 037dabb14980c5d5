//! Custom field models
//!
//! - Chained lists: catalog links configured on a "chained list" custom field
//! - Field values: the `custom_fields_values` payload attached to entities

pub mod chained_lists;
pub mod values;

pub use chained_lists::{ChainedList, ChainedLists};
pub use values::{CustomFieldValue, CustomFieldValueCollection, CustomFieldValuesModel};
