//! Lexical configuration of the settings file format.
//!
//! The defaults describe the standard format (`#` comments, `+` continuation
//! marker, `%BASEDIR%` placeholder).  A different dialect can be described in
//! TOML:
//!
//! ```toml
//! comment_marker = ";"
//! continuation_marker = "&"
//! base_dir_placeholder = "${HERE}"
//! ```
//!
//! # Serde default values
//!
//! Every field is annotated with `#[serde(default = "some_fn")]`, so a TOML
//! document only needs to name the markers it changes.  An empty document
//! yields [`SyntaxConfig::default()`].

use serde::Deserialize;
use thiserror::Error;

/// Error type for building a [`SyntaxConfig`] from TOML.
#[derive(Debug, Error)]
pub enum SyntaxConfigError {
    /// The TOML content could not be parsed.
    #[error("failed to parse syntax config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A marker collides with the format's own structure.
    #[error("invalid {field}: {reason}")]
    InvalidMarker {
        field: &'static str,
        reason: &'static str,
    },
}

/// Markers the parser recognises while reading a settings file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SyntaxConfig {
    /// A line whose first non-whitespace character is this marker is skipped.
    #[serde(default = "default_comment_marker")]
    pub comment_marker: char,
    /// Stripped from every line before it is split.  Purely cosmetic.
    #[serde(default = "default_continuation_marker")]
    pub continuation_marker: char,
    /// Replaced inside quoted strings with the settings file's directory.
    #[serde(default = "default_base_dir_placeholder")]
    pub base_dir_placeholder: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_comment_marker() -> char {
    '#'
}
fn default_continuation_marker() -> char {
    '+'
}
fn default_base_dir_placeholder() -> String {
    "%BASEDIR%".to_string()
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            comment_marker: default_comment_marker(),
            continuation_marker: default_continuation_marker(),
            base_dir_placeholder: default_base_dir_placeholder(),
        }
    }
}

impl SyntaxConfig {
    /// Parses and validates a syntax configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxConfigError::Parse`] for malformed TOML or unknown
    /// fields, and [`SyntaxConfigError::InvalidMarker`] if
    /// [`validate`](Self::validate) rejects the result.
    pub fn from_toml_str(content: &str) -> Result<Self, SyntaxConfigError> {
        let cfg: SyntaxConfig = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks that no marker would change how lines are split or quoted.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxConfigError::InvalidMarker`] when a marker is `=`,
    /// `"`, or whitespace, when both markers are the same character, or when
    /// the placeholder is empty.
    pub fn validate(&self) -> Result<(), SyntaxConfigError> {
        check_marker("comment_marker", self.comment_marker)?;
        check_marker("continuation_marker", self.continuation_marker)?;
        if self.comment_marker == self.continuation_marker {
            return Err(SyntaxConfigError::InvalidMarker {
                field: "continuation_marker",
                reason: "must differ from comment_marker",
            });
        }
        if self.base_dir_placeholder.is_empty() {
            return Err(SyntaxConfigError::InvalidMarker {
                field: "base_dir_placeholder",
                reason: "must not be empty",
            });
        }
        Ok(())
    }
}

fn check_marker(field: &'static str, marker: char) -> Result<(), SyntaxConfigError> {
    let reason = match marker {
        '=' => "must not be the key/value separator '='",
        '"' => "must not be the string quote '\"'",
        c if c.is_whitespace() => "must not be whitespace",
        _ => return Ok(()),
    };
    Err(SyntaxConfigError::InvalidMarker { field, reason })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_standard_format() {
        // Arrange / Act
        let cfg = SyntaxConfig::default();

        // Assert
        assert_eq!(cfg.comment_marker, '#');
        assert_eq!(cfg.continuation_marker, '+');
        assert_eq!(cfg.base_dir_placeholder, "%BASEDIR%");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let cfg = SyntaxConfig::from_toml_str("").expect("empty document");
        assert_eq!(cfg, SyntaxConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides_only_named_fields() {
        // Arrange
        let toml_str = r#"comment_marker = ";""#;

        // Act
        let cfg = SyntaxConfig::from_toml_str(toml_str).expect("partial");

        // Assert
        assert_eq!(cfg.comment_marker, ';');
        // Unspecified fields keep their defaults
        assert_eq!(cfg.continuation_marker, '+');
        assert_eq!(cfg.base_dir_placeholder, "%BASEDIR%");
    }

    #[test]
    fn test_full_toml_round_trips_all_fields() {
        let toml_str = r#"
comment_marker = ";"
continuation_marker = "&"
base_dir_placeholder = "${HERE}"
"#;
        let cfg = SyntaxConfig::from_toml_str(toml_str).expect("full");
        assert_eq!(
            cfg,
            SyntaxConfig {
                comment_marker: ';',
                continuation_marker: '&',
                base_dir_placeholder: "${HERE}".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_toml_returns_parse_error() {
        let result = SyntaxConfig::from_toml_str("[[[ not valid toml");
        assert!(matches!(result, Err(SyntaxConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_field_returns_parse_error() {
        let result = SyntaxConfig::from_toml_str("separator = \":\"");
        assert!(matches!(result, Err(SyntaxConfigError::Parse(_))));
    }

    #[test]
    fn test_equals_sign_marker_is_rejected() {
        let result = SyntaxConfig::from_toml_str(r#"continuation_marker = "=""#);
        assert!(matches!(
            result,
            Err(SyntaxConfigError::InvalidMarker {
                field: "continuation_marker",
                ..
            })
        ));
    }

    #[test]
    fn test_quote_and_whitespace_markers_are_rejected() {
        let quote = SyntaxConfig {
            comment_marker: '"',
            ..SyntaxConfig::default()
        };
        let space = SyntaxConfig {
            continuation_marker: ' ',
            ..SyntaxConfig::default()
        };
        assert!(quote.validate().is_err());
        assert!(space.validate().is_err());
    }

    #[test]
    fn test_identical_markers_are_rejected() {
        let cfg = SyntaxConfig {
            comment_marker: '+',
            continuation_marker: '+',
            ..SyntaxConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_empty_placeholder_is_rejected() {
        let result = SyntaxConfig::from_toml_str(r#"base_dir_placeholder = """#);
        assert!(matches!(
            result,
            Err(SyntaxConfigError::InvalidMarker {
                field: "base_dir_placeholder",
                ..
            })
        ));
    }
}
