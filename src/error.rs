//! Error types for parsing, merging and serializing documents.

use crate::codec::Format;
use thiserror::Error;

/// Message key handed to the [`Localizer`](crate::merge::Localizer) when an
/// input holds more than one document.
pub const MULTI_DOCUMENT_MESSAGE: &str =
    "Automatic merge is only supported for a single YAML/JSON document.";

/// MergeError is returned when a merge cannot produce a result at all.
///
/// Conflicts are not errors; they are reported in the merge result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("failed to parse {format}: {message}")]
    Parse { format: Format, message: String },

    #[error("{message}")]
    MultiDocument { message: String },

    #[error("failed to serialize {format}: {message}")]
    Serialize { format: Format, message: String },
}

impl MergeError {
    /// Creates a parse error.
    pub fn parse(format: Format, message: impl Into<String>) -> Self {
        MergeError::Parse {
            format,
            message: message.into(),
        }
    }

    /// Creates a multi-document error carrying already localized text.
    pub fn multi_document(message: impl Into<String>) -> Self {
        MergeError::MultiDocument {
            message: message.into(),
        }
    }

    /// Creates a serialize error.
    pub fn serialize(format: Format, message: impl Into<String>) -> Self {
        MergeError::Serialize {
            format,
            message: message.into(),
        }
    }
}
