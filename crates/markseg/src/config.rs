//! Tokenizer configuration and its limits

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind, Result, Span};
use crate::markup::is_valid_name;

/// Tag name of the synthetic element wrapped around every fragment
pub const DEFAULT_WRAPPER_TAG: &str = "sentence";
/// Text emitted in place of a subtree that failed to render
pub const DEFAULT_ERROR_MARKER: &str = "JP Morph Error";
/// Maximum element nesting depth, the wrapper included
pub const DEFAULT_MAX_DEPTH: usize = 128;
/// Maximum wrapped fragment size (1MB)
pub const DEFAULT_MAX_SIZE: usize = 1_048_576;

/// Configuration for fragment parsing and rendering
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TokenizerConfig {
    /// Name of the synthetic root element; transparent in output
    pub wrapper_tag: String,
    /// Diagnostic text substituted for a subtree that failed to render
    pub error_marker: String,
    /// Maximum element nesting depth
    pub max_depth: usize,
    /// Maximum wrapped input size in bytes
    pub max_size: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            wrapper_tag: DEFAULT_WRAPPER_TAG.to_string(),
            error_marker: DEFAULT_ERROR_MARKER.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl fmt::Display for TokenizerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TokenizerConfig {{ wrapper_tag: {}, error_marker: {:?}, max_depth: {}, max_size: {} }}",
            self.wrapper_tag, self.error_marker, self.max_depth, self.max_size
        )
    }
}

impl TokenizerConfig {
    pub fn with_wrapper_tag(mut self, wrapper_tag: impl Into<String>) -> Self {
        self.wrapper_tag = wrapper_tag.into();
        self
    }

    pub fn with_error_marker(mut self, error_marker: impl Into<String>) -> Self {
        self.error_marker = error_marker.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !is_valid_name(&self.wrapper_tag) {
            return Err(invalid(format!(
                "wrapper tag {:?} is not a valid element name",
                self.wrapper_tag
            )));
        }
        if self.max_depth == 0 {
            return Err(invalid("max_depth must be at least 1"));
        }
        if self.max_size == 0 {
            return Err(invalid("max_size must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::with_message(ErrorKind::InvalidConfig, Span::empty(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = TokenizerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.wrapper_tag, "sentence");
        assert_eq!(config.error_marker, "JP Morph Error");
    }

    #[test]
    fn test_rejects_bad_wrapper() {
        for tag in ["", "two words", "<b>", "1st"] {
            let err = TokenizerConfig::default().with_wrapper_tag(tag).validate().err();
            assert_eq!(err.map(|e| e.kind().clone()), Some(ErrorKind::InvalidConfig));
        }
    }

    #[test]
    fn test_rejects_zero_limits() {
        assert!(TokenizerConfig::default().with_max_depth(0).validate().is_err());
        assert!(TokenizerConfig::default().with_max_size(0).validate().is_err());
    }

    #[test]
    fn test_display() {
        let shown = TokenizerConfig::default().to_string();
        assert!(shown.contains("wrapper_tag: sentence"));
        assert!(shown.contains("max_depth: 128"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_config_uses_defaults() -> std::result::Result<(), serde_json::Error> {
        let config: TokenizerConfig = serde_json::from_str(r#"{"wrapper_tag":"s"}"#)?;
        assert_eq!(config.wrapper_tag, "s");
        assert_eq!(config.max_size, DEFAULT_MAX_SIZE);
        Ok(())
    }
}
