//! Support types shared by every model in the SDK
//!
//! - [`Collection`]: ordered key/value container used as the base of every typed collection
//! - [`CollectionKey`]: integer or string key of a collection entry
//! - [`RawInput`]: classification of decoded JSON at the parse boundary
//! - [`coerce`]: loose scalar coercion for upstream payloads

pub mod coerce;
pub mod collection;
pub mod key;
pub mod raw;

pub use collection::Collection;
pub use key::CollectionKey;
pub use raw::{RawInput, RawRecord};

/// Error type for collection operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CollectionError {
    #[error("Invalid input: expected {expected}, found {found}")]
    InvalidInputKind {
        expected: &'static str,
        found: &'static str,
    },
    #[error("Key not found: {0}")]
    KeyNotFound(CollectionKey),
    #[error("Cannot append: the next integer key is already occupied")]
    NextKeyOccupied,
}
