//! Collection keys
//!
//! Keys are either integer indexes or string names. Strings holding a
//! canonical decimal integer are normalized to indexes, so `"5"` and `5`
//! address the same entry, the same way the upstream API treats its
//! associative arrays.

use std::fmt;

/// Key of an entry in a [`Collection`](super::Collection)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CollectionKey {
    /// Integer key, auto-assigned on append or given explicitly
    Index(i64),
    /// String key
    Name(String),
}

impl CollectionKey {
    /// Integer value of the key, if it is an index
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(_) => None,
        }
    }

    /// Parse a string key, normalizing canonical integers to [`CollectionKey::Index`]
    pub fn parse(name: &str) -> Self {
        match canonical_index(name) {
            Some(index) => Self::Index(index),
            None => Self::Name(name.to_string()),
        }
    }
}

/// `"0"`, `"17"`, `"-3"` are canonical; `"007"`, `"-0"`, `"+1"`, `" 1"` are not.
fn canonical_index(name: &str) -> Option<i64> {
    let digits = name.strip_prefix('-').unwrap_or(name);
    let canonical = match digits.as_bytes() {
        [] => false,
        [b'0'] => digits.len() == name.len(),
        [first, rest @ ..] => {
            (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit)
        }
    };
    if canonical { name.parse().ok() } else { None }
}

impl fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{}", index),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<i64> for CollectionKey {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<i32> for CollectionKey {
    fn from(index: i32) -> Self {
        Self::Index(i64::from(index))
    }
}

impl From<u32> for CollectionKey {
    fn from(index: u32) -> Self {
        Self::Index(i64::from(index))
    }
}

impl From<usize> for CollectionKey {
    fn from(index: usize) -> Self {
        match i64::try_from(index) {
            Ok(index) => Self::Index(index),
            Err(_) => Self::Name(index.to_string()),
        }
    }
}

impl From<&str> for CollectionKey {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<String> for CollectionKey {
    fn from(name: String) -> Self {
        match canonical_index(&name) {
            Some(index) => Self::Index(index),
            None => Self::Name(name),
        }
    }
}

impl From<&CollectionKey> for CollectionKey {
    fn from(key: &CollectionKey) -> Self {
        key.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_strings_normalize_to_index() {
        assert_eq!(CollectionKey::from("5"), CollectionKey::Index(5));
        assert_eq!(CollectionKey::from("0"), CollectionKey::Index(0));
        assert_eq!(CollectionKey::from("-3"), CollectionKey::Index(-3));
    }

    #[test]
    fn test_non_canonical_strings_stay_names() {
        for name in ["007", "-0", "+1", " 1", "", "-", "1.5", "abc"] {
            assert_eq!(
                CollectionKey::from(name),
                CollectionKey::Name(name.to_string()),
                "{:?} should stay a name",
                name
            );
        }
    }

    #[test]
    fn test_overflowing_digits_stay_names() {
        let key = CollectionKey::from("99999999999999999999");
        assert!(matches!(key, CollectionKey::Name(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(CollectionKey::Index(42).to_string(), "42");
        assert_eq!(CollectionKey::from("catalog").to_string(), "catalog");
    }
}
