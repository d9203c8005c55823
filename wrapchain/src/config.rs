//! Chain configuration.

use serde::{Deserialize, Serialize};

use crate::error::ChainError;

/// Settings attached to a [`Chain`](crate::Chain) at creation.
///
/// Every field is optional; `None` means "no limit" or "unset".
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Maximum number of nested unit invocations in one call stack.
    ///
    /// A follow-on pointing at the unit with zero-based depth `d` fails
    /// with [`ChainError::TooDeep`] when `d >= max_depth`.
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Name recorded on every tracing event emitted by the chain.
    #[serde(default)]
    pub label: Option<String>,
}

impl ChainConfig {
    /// Cap recursion at `max_depth` nested units.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Label the chain in log output.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Parse a config from JSON, e.g. `{"max_depth": 64, "label": "auth"}`.
    pub fn from_json(json: &str) -> Result<Self, ChainError> {
        serde_json::from_str(json).map_err(|e| ChainError::Config(e.to_string()))
    }

    pub(crate) fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_limit() {
        let config = ChainConfig::default();
        assert_eq!(config.max_depth, None);
        assert_eq!(config.label(), "");
    }

    #[test]
    fn builders_set_fields() {
        let config = ChainConfig::default().with_max_depth(8).with_label("auth");
        assert_eq!(config.max_depth, Some(8));
        assert_eq!(config.label.as_deref(), Some("auth"));
    }

    #[test]
    fn from_json_fills_missing_fields() {
        let config = ChainConfig::from_json(r#"{"max_depth": 3}"#).unwrap();
        assert_eq!(config, ChainConfig::default().with_max_depth(3));

        let empty = ChainConfig::from_json("{}").unwrap();
        assert_eq!(empty, ChainConfig::default());
    }

    #[test]
    fn from_json_rejects_bad_input() {
        let err = ChainConfig::from_json(r#"{"max_depth": "deep"}"#).unwrap_err();
        assert!(matches!(err, ChainError::Config(_)));
    }
}
