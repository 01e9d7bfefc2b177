//! Error types for the samtags library.

use std::path::PathBuf;
use thiserror::Error;

use crate::validator::DeclarationRejected;

/// Main error type for samtags operations.
#[derive(Debug, Error)]
pub enum SamTagError {
    /// The input is not a named collection of named tag members.
    #[error(
        "{declaration}: SAM tag declarations must be a named set of uniquely-named members \
         ({reason})"
    )]
    NotAnEnumeration { declaration: String, reason: String },

    /// A member's value is not a string.
    #[error("{declaration}: SAM tag members must be string-valued, but '{member}' is {found}")]
    NotStringValued {
        declaration: String,
        member: String,
        found: String,
    },

    /// The declaration violated one or more content rules.
    #[error(transparent)]
    Rejected(#[from] DeclarationRejected),

    /// Lookup of a code that is not a standard tag.
    #[error("'{0}' is not a predefined standard SAM tag")]
    UnknownStandardTag(String),

    /// Error reading a declaration file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SamTagError {
    /// True for errors raised because the input had the wrong shape, before
    /// any tag content was inspected.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            SamTagError::NotAnEnumeration { .. } | SamTagError::NotStringValued { .. }
        )
    }

    /// The aggregate rejection, if this error is one.
    pub fn as_rejection(&self) -> Option<&DeclarationRejected> {
        match self {
            SamTagError::Rejected(rejected) => Some(rejected),
            _ => None,
        }
    }
}

/// Result type alias for samtags operations.
pub type Result<T> = std::result::Result<T, SamTagError>;
