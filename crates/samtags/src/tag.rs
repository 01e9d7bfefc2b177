//! Two-character SAM tag codes.
//!
//! Every optional field in a SAM record is keyed by a two-character tag. The
//! first character must be alphabetic and the second alphanumeric. Tags that
//! are not predefined by the SAMtags specification are "local" and, by
//! convention, either start with `X`, `Y` or `Z` or contain no uppercase
//! letters.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::standard::StandardTag;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]$").expect("valid tag regex"));

/// Prefixes reserved for locally-defined uppercase tags.
pub const LOCAL_TAG_PREFIXES: [char; 3] = ['X', 'Y', 'Z'];

/// True if `code` has the shape of a SAM tag.
pub fn is_valid_shape(code: &str) -> bool {
    TAG_PATTERN.is_match(code)
}

/// True if `code` follows the naming convention for locally-defined tags.
///
/// Only meaningful for codes that already pass [`is_valid_shape`].
pub fn is_conventional_local(code: &str) -> bool {
    code.starts_with(LOCAL_TAG_PREFIXES) || is_lowercase(code)
}

// At least one cased character and no uppercase ones.
fn is_lowercase(code: &str) -> bool {
    code.chars().any(|c| c.is_lowercase()) && !code.chars().any(|c| c.is_uppercase())
}

/// A SAM tag code known to have a valid shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TagCode([u8; 2]);

impl TagCode {
    /// Parse a tag code, returning `None` if it does not have a valid shape.
    pub fn parse(code: &str) -> Option<Self> {
        if !is_valid_shape(code) {
            return None;
        }
        let bytes = code.as_bytes();
        Some(Self([bytes[0], bytes[1]]))
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        // Both bytes are ASCII alphanumerics.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// The standard tag with this code, if any.
    pub fn standard(&self) -> Option<StandardTag> {
        StandardTag::from_code(self.as_str())
    }

    /// Classify this code.
    pub fn kind(&self) -> TagKind {
        if self.standard().is_some() {
            TagKind::Standard
        } else if is_conventional_local(self.as_str()) {
            TagKind::Local
        } else {
            TagKind::UnconventionalLocal
        }
    }
}

impl fmt::Display for TagCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for TagCode {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid SAM tag: '{value}'"))
    }
}

impl From<TagCode> for String {
    fn from(code: TagCode) -> Self {
        code.as_str().to_string()
    }
}

/// How a well-formed tag code relates to the standard catalog and the local
/// naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    /// Predefined by the SAMtags specification.
    Standard,
    /// Not standard, and follows the local-tag convention.
    Local,
    /// Not standard, and does not follow the local-tag convention.
    UnconventionalLocal,
}

impl TagKind {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            TagKind::Standard => "standard",
            TagKind::Local => "local",
            TagKind::UnconventionalLocal => "unconventional local",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_shapes() {
        for code in ["XG", "xb", "a1", "Z9", "Ab"] {
            assert!(is_valid_shape(code), "{code} should be valid");
        }
    }

    #[test]
    fn test_invalid_shapes() {
        for code in ["", "a", "abc", "1a", "_a", "a_", "é1", "a\n"] {
            assert!(!is_valid_shape(code), "{code:?} should be invalid");
        }
    }

    #[test]
    fn test_local_convention() {
        assert!(is_conventional_local("XG"));
        assert!(is_conventional_local("Ya"));
        assert!(is_conventional_local("Z0"));
        assert!(is_conventional_local("xb"));
        assert!(is_conventional_local("x1"));

        assert!(!is_conventional_local("AA"));
        assert!(!is_conventional_local("aB"));
        assert!(!is_conventional_local("A1"));
    }

    #[test]
    fn test_parse() {
        let code = TagCode::parse("XG").unwrap();
        assert_eq!(code.as_str(), "XG");
        assert_eq!(code.to_string(), "XG");

        assert!(TagCode::parse("XGG").is_none());
        assert!(TagCode::parse("1X").is_none());
    }

    #[test]
    fn test_kind() {
        assert_eq!(TagCode::parse("RG").unwrap().kind(), TagKind::Standard);
        assert_eq!(TagCode::parse("XG").unwrap().kind(), TagKind::Local);
        assert_eq!(TagCode::parse("xb").unwrap().kind(), TagKind::Local);
        assert_eq!(
            TagCode::parse("AA").unwrap().kind(),
            TagKind::UnconventionalLocal
        );
    }

    #[test]
    fn test_serde() {
        let code: TagCode = serde_json::from_str("\"XG\"").unwrap();
        assert_eq!(code.as_str(), "XG");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"XG\"");

        assert!(serde_json::from_str::<TagCode>("\"XGG\"").is_err());
    }
}
