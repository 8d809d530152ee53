//! Document format selection.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Format of a document's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Yaml,
}

/// Returned when a format name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown document format '{0}', expected 'json' or 'yaml'")]
pub struct UnknownFormatError(pub String);

impl Format {
    /// Guesses the format from the text: JSON when it opens with `{` or `[`,
    /// YAML otherwise.
    pub fn sniff(text: &str) -> Format {
        let trimmed = text.trim_start();
        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            Format::Json
        } else {
            Format::Yaml
        }
    }

    /// Uses `hint` when given, otherwise sniffs `text`.
    pub fn resolve(hint: Option<Format>, text: &str) -> Format {
        hint.unwrap_or_else(|| Format::sniff(text))
    }

    /// Parses a caller supplied hint, where the empty string means "no hint".
    pub fn from_hint(hint: &str) -> Result<Option<Format>, UnknownFormatError> {
        if hint.trim().is_empty() {
            return Ok(None);
        }
        hint.parse().map(Some)
    }
}

impl FromStr for Format {
    type Err = UnknownFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(UnknownFormatError(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "JSON"),
            Format::Yaml => write!(f, "YAML"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff() {
        assert_eq!(Format::sniff("  \n{\"a\": 1}"), Format::Json);
        assert_eq!(Format::sniff("[1, 2]"), Format::Json);
        assert_eq!(Format::sniff("a: 1"), Format::Yaml);
        assert_eq!(Format::sniff("- {a: 1}"), Format::Yaml);
        assert_eq!(Format::sniff(""), Format::Yaml);
    }

    #[test]
    fn test_hint_wins_over_sniffing() {
        assert_eq!(Format::resolve(Some(Format::Yaml), "{\"a\": 1}"), Format::Yaml);
        assert_eq!(Format::resolve(None, "{\"a\": 1}"), Format::Json);
    }

    #[test]
    fn test_from_hint() {
        assert_eq!(Format::from_hint(""), Ok(None));
        assert_eq!(Format::from_hint("JSON"), Ok(Some(Format::Json)));
        assert_eq!(Format::from_hint("yml"), Ok(Some(Format::Yaml)));
        assert!(Format::from_hint("toml").is_err());
    }
}
