//! Configuration for parsing typed collections

use serde::{Deserialize, Serialize};

/// What to do with a batch entry that is not a non-empty object
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedRecordPolicy {
    /// Drop the entry and keep parsing the rest of the batch
    #[default]
    Skip,
    /// Fail the whole batch with [`ModelError::MalformedRecord`](super::ModelError::MalformedRecord)
    Reject,
}

/// Configuration for [`TypedCollection::from_array_with`](super::TypedCollection::from_array_with)
///
/// Collections are lenient by default: upstream arrays may carry empty or
/// non-object rows, and those are skipped. Models stay strict regardless of
/// this setting, a missing identifying field always fails that model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseConfig {
    /// Handling of empty and non-object batch entries
    #[serde(default)]
    pub malformed_records: MalformedRecordPolicy,
}

impl ParseConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Lenient configuration (the default)
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Configuration that rejects malformed batch entries
    pub fn strict() -> Self {
        Self::builder()
            .malformed_records(MalformedRecordPolicy::Reject)
            .build()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> ParseConfigBuilder {
        ParseConfigBuilder::default()
    }
}

/// Builder for ParseConfig
#[derive(Debug, Default)]
pub struct ParseConfigBuilder {
    config: ParseConfig,
}

impl ParseConfigBuilder {
    /// Set the handling of malformed batch entries
    pub fn malformed_records(mut self, policy: MalformedRecordPolicy) -> Self {
        self.config.malformed_records = policy;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ParseConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_lenient() {
        let config = ParseConfig::default();
        assert_eq!(config.malformed_records, MalformedRecordPolicy::Skip);
        assert_eq!(config, ParseConfig::lenient());
    }

    #[test]
    fn test_strict() {
        assert_eq!(ParseConfig::strict().malformed_records, MalformedRecordPolicy::Reject);
    }

    #[test]
    fn test_deserialize() {
        let config: ParseConfig = serde_json::from_str(r#"{"malformedRecords": "reject"}"#).unwrap();
        assert_eq!(config, ParseConfig::strict());

        let config: ParseConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ParseConfig::lenient());
    }
}
