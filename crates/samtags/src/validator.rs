//! Validation of locally-defined SAM tag declarations.
//!
//! The validator is a gate: a valid declaration is returned unchanged, an
//! invalid one is rejected with every violation found, never just the first.
//!
//! # Rules
//!
//! Each member is checked, in order, against:
//!
//! 1. **Shape**: the value matches `^[A-Za-z][A-Za-z0-9]$`.
//! 2. **Standard collision**: the value is not a predefined standard tag,
//!    unless [`ValidatorConfig::permit_standard_collisions`] is set.
//! 3. **Local convention** (strict mode only): the value starts with `X`, `Y`
//!    or `Z`, or contains no uppercase letters.
//!
//! A member that fails one rule is not checked against the later ones. A
//! permitted standard collision is exempt from the local convention, since the
//! value is the standard tag itself.
//!
//! Across the declaration, values must be unique. Each duplicated value is
//! reported once, naming every member that shares it.
//!
//! # Example
//!
//! ```
//! use samtags::{TagDeclaration, TagDeclarationValidator, ValidatorConfig};
//!
//! let decl = TagDeclaration::builder("CustomTag")
//!     .member("XB", "xb")
//!     .member("XC", "xb")
//!     .member("AA", "AA")
//!     .build()
//!     .unwrap();
//!
//! let validator = TagDeclarationValidator::with_config(ValidatorConfig::default());
//! let err = validator.validate(decl).unwrap_err();
//! let rejected = err.as_rejection().unwrap();
//! assert_eq!(rejected.violations().len(), 2);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::declaration::{DeclarationOptions, TagDeclaration, TagMember};
use crate::error::Result;
use crate::standard::is_standard_tag;
use crate::tag::{is_conventional_local, is_valid_shape};

/// Configuration for declaration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Enforce the local-tag naming convention.
    pub strict: bool,
    /// Allow members whose value is a predefined standard tag.
    pub permit_standard_collisions: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            strict: true,
            permit_standard_collisions: false,
        }
    }
}

impl ValidatorConfig {
    /// Set strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set whether standard tag collisions are permitted.
    pub fn with_standard_collisions(mut self, permit: bool) -> Self {
        self.permit_standard_collisions = permit;
        self
    }

    /// This configuration with a declaration's own overrides applied.
    pub fn merged_with(self, options: Option<&DeclarationOptions>) -> Self {
        let Some(options) = options else {
            return self;
        };
        Self {
            strict: options.strict.unwrap_or(self.strict),
            permit_standard_collisions: options
                .permit_standard_collisions
                .unwrap_or(self.permit_standard_collisions),
        }
    }
}

/// The rule a violation breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Two or more members share a value.
    DuplicateTagValue,
    /// The value is not a two-character tag.
    InvalidShape,
    /// The value is a predefined standard tag.
    StandardCollision,
    /// The value does not follow the local-tag convention.
    NonConventionalLocalTag,
}

impl ViolationKind {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ViolationKind::DuplicateTagValue => "Duplicate Tag Value",
            ViolationKind::InvalidShape => "Invalid Shape",
            ViolationKind::StandardCollision => "Standard Collision",
            ViolationKind::NonConventionalLocalTag => "Non-conventional Local Tag",
        }
    }

    fn reason(&self) -> &'static str {
        match self {
            ViolationKind::DuplicateTagValue => {
                "SAM tag values must be unique within a declaration."
            }
            ViolationKind::InvalidShape => "SAM tags must be two-character alphanumeric strings.",
            ViolationKind::StandardCollision => {
                "Locally-defined SAM tags may not conflict with a predefined standard tag."
            }
            ViolationKind::NonConventionalLocalTag => {
                "Locally-defined SAM tags must be lowercase or start with X, Y, or Z."
            }
        }
    }
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The rule broken.
    pub kind: ViolationKind,
    /// Offending member names, sorted. More than one only for duplicates.
    pub members: Vec<String>,
    /// Offending tag value.
    pub value: String,
}

impl Violation {
    fn member(kind: ViolationKind, member: &TagMember) -> Self {
        Self {
            kind,
            members: vec![member.name.clone()],
            value: member.value.clone(),
        }
    }

    /// Human-readable message naming the members, the value and the reason.
    pub fn message(&self) -> String {
        format!(
            "{} ('{}'): {}",
            self.members.join(", "),
            self.value,
            self.kind.reason()
        )
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Every violation found in one declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationRejected {
    declaration: String,
    violations: Vec<Violation>,
}

impl DeclarationRejected {
    /// Name of the rejected declaration.
    pub fn declaration(&self) -> &str {
        &self.declaration
    }

    /// Violations, duplicates first, then by value and member name.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Violations of one kind.
    pub fn of_kind(&self, kind: ViolationKind) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.kind == kind)
    }
}

impl fmt::Display for DeclarationRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: The following SAM tags are invalid:",
            self.declaration
        )?;
        for violation in &self.violations {
            write!(f, "\n  {violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for DeclarationRejected {}

/// Validates tag declarations against a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct TagDeclarationValidator {
    config: ValidatorConfig,
}

impl TagDeclarationValidator {
    /// Create a validator with the default (strict) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with a custom configuration.
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// The base configuration. Declarations may override it.
    pub fn config(&self) -> ValidatorConfig {
        self.config
    }

    /// Validate a declaration, returning it unchanged if it has no violations.
    pub fn validate(&self, declaration: TagDeclaration) -> Result<TagDeclaration> {
        let violations = self.check(&declaration);
        if violations.is_empty() {
            tracing::debug!(
                declaration = declaration.name(),
                members = declaration.len(),
                "SAM tag declaration accepted"
            );
            return Ok(declaration);
        }

        tracing::debug!(
            declaration = declaration.name(),
            violations = violations.len(),
            "SAM tag declaration rejected"
        );
        Err(DeclarationRejected {
            declaration: declaration.name().to_string(),
            violations,
        }
        .into())
    }

    /// Check the structure of a JSON document, then validate its content.
    ///
    /// Structural errors are returned before any content rule is applied.
    pub fn validate_value(&self, value: &Value) -> Result<TagDeclaration> {
        let declaration = TagDeclaration::from_json_value(value)?;
        self.validate(declaration)
    }

    /// Collect every violation in a declaration without consuming it.
    pub fn check(&self, declaration: &TagDeclaration) -> Vec<Violation> {
        let config = self.config.merged_with(declaration.options());

        let mut violations = duplicate_values(declaration);
        violations.extend(
            declaration
                .members()
                .iter()
                .filter_map(|member| check_member(member, &config)),
        );

        violations.sort_by(|a, b| {
            (a.kind != ViolationKind::DuplicateTagValue, &a.value, &a.members).cmp(&(
                b.kind != ViolationKind::DuplicateTagValue,
                &b.value,
                &b.members,
            ))
        });
        violations
    }
}

/// Validate a declaration with the given configuration.
pub fn validate(declaration: TagDeclaration, config: ValidatorConfig) -> Result<TagDeclaration> {
    TagDeclarationValidator::with_config(config).validate(declaration)
}

fn check_member(member: &TagMember, config: &ValidatorConfig) -> Option<Violation> {
    let value = member.value.as_str();

    if !is_valid_shape(value) {
        return Some(Violation::member(ViolationKind::InvalidShape, member));
    }

    if is_standard_tag(value) {
        if config.permit_standard_collisions {
            return None;
        }
        return Some(Violation::member(ViolationKind::StandardCollision, member));
    }

    if config.strict && !is_conventional_local(value) {
        return Some(Violation::member(
            ViolationKind::NonConventionalLocalTag,
            member,
        ));
    }

    None
}

fn duplicate_values(declaration: &TagDeclaration) -> Vec<Violation> {
    let mut by_value: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for member in declaration.members() {
        by_value
            .entry(member.value.as_str())
            .or_default()
            .push(member.name.as_str());
    }

    by_value
        .into_iter()
        .filter(|(_, names)| names.len() > 1)
        .map(|(value, mut names)| {
            names.sort_unstable();
            Violation {
                kind: ViolationKind::DuplicateTagValue,
                members: names.into_iter().map(String::from).collect(),
                value: value.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SamTagError;
    use crate::standard::StandardTag;
    use serde_json::json;

    fn single(value: &str) -> TagDeclaration {
        TagDeclaration::builder("BadTag")
            .member("XB", value)
            .build()
            .unwrap()
    }

    fn rejection(result: Result<TagDeclaration>) -> DeclarationRejected {
        match result {
            Err(SamTagError::Rejected(rejected)) => rejected,
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_accepts_conventional_local_tag() {
        let decl = single("XG");
        let validated = TagDeclarationValidator::new().validate(decl.clone()).unwrap();
        assert_eq!(validated, decl);
    }

    #[test]
    fn test_invalid_shapes() {
        for value in ["", "a", "abc", "1a"] {
            let rejected = rejection(TagDeclarationValidator::new().validate(single(value)));
            assert_eq!(rejected.violations().len(), 1);
            assert_eq!(rejected.violations()[0].kind, ViolationKind::InvalidShape);

            let msg = rejected.to_string();
            assert!(msg.starts_with("BadTag: The following SAM tags are invalid:"));
            assert!(msg.ends_with(&format!(
                "XB ('{value}'): SAM tags must be two-character alphanumeric strings."
            )));
        }
    }

    #[test]
    fn test_standard_collision() {
        let rejected = rejection(TagDeclarationValidator::new().validate(single("RG")));
        assert_eq!(rejected.violations()[0].kind, ViolationKind::StandardCollision);
        assert!(rejected.to_string().ends_with(
            "XB ('RG'): Locally-defined SAM tags may not conflict with a predefined standard tag."
        ));
    }

    #[test]
    fn test_permitted_collision_skips_convention() {
        let config = ValidatorConfig::default().with_standard_collisions(true);
        for tag in StandardTag::ALL {
            assert!(validate(single(tag.code()), config).is_ok(), "{tag}");
        }
    }

    #[test]
    fn test_strict_convention() {
        let rejected = rejection(TagDeclarationValidator::new().validate(single("AA")));
        assert_eq!(
            rejected.violations()[0].kind,
            ViolationKind::NonConventionalLocalTag
        );
        assert!(rejected.to_string().ends_with(
            "XB ('AA'): Locally-defined SAM tags must be lowercase or start with X, Y, or Z."
        ));

        let lenient = ValidatorConfig::default().with_strict(false);
        assert!(validate(single("AA"), lenient).is_ok());
    }

    #[test]
    fn test_duplicates_are_grouped() {
        let decl = TagDeclaration::builder("BadTag")
            .member("XD", "xb")
            .member("XB", "xb")
            .member("XC", "xb")
            .member("XE", "xe")
            .build()
            .unwrap();

        let rejected = rejection(TagDeclarationValidator::new().validate(decl));
        assert_eq!(rejected.violations().len(), 1);

        let violation = &rejected.violations()[0];
        assert_eq!(violation.kind, ViolationKind::DuplicateTagValue);
        assert_eq!(violation.members, vec!["XB", "XC", "XD"]);
        assert_eq!(violation.value, "xb");
        assert_eq!(
            violation.message(),
            "XB, XC, XD ('xb'): SAM tag values must be unique within a declaration."
        );
    }

    #[test]
    fn test_accumulates_all_violations_in_order() {
        let decl = TagDeclaration::builder("BadTag")
            .member("Z", "zz")
            .member("Y", "AA")
            .member("X", "RG")
            .member("W", "abc")
            .member("V", "zz")
            .build()
            .unwrap();

        let rejected = rejection(TagDeclarationValidator::new().validate(decl));
        let kinds: Vec<ViolationKind> = rejected.violations().iter().map(|v| v.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ViolationKind::DuplicateTagValue,
                ViolationKind::NonConventionalLocalTag,
                ViolationKind::StandardCollision,
                ViolationKind::InvalidShape,
            ]
        );
        assert_eq!(rejected.of_kind(ViolationKind::InvalidShape).count(), 1);

        let text = rejected.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "BadTag: The following SAM tags are invalid:");
        assert!(lines[1].starts_with("  V, Z ('zz')"));
    }

    #[test]
    fn test_declaration_options_override_config() {
        let decl = TagDeclaration::builder("Lenient")
            .member("A", "AA")
            .options(DeclarationOptions {
                strict: Some(false),
                permit_standard_collisions: None,
            })
            .build()
            .unwrap();

        assert!(TagDeclarationValidator::new().validate(decl).is_ok());
    }

    #[test]
    fn test_validate_value_structural_first() {
        let validator = TagDeclarationValidator::new();

        // Content is invalid too, but the structural error wins.
        let value = json!({ "name": "BadTag", "members": { "XB": "RG", "XC": 7 } });
        let err = validator.validate_value(&value).unwrap_err();
        assert!(err.is_structural());
        assert!(err.as_rejection().is_none());

        let value = json!({ "name": "Good", "members": { "XB": "xb" } });
        assert_eq!(validator.validate_value(&value).unwrap().name(), "Good");
    }

    #[test]
    fn test_check_is_idempotent() {
        let decl = TagDeclaration::builder("BadTag")
            .member("XB", "xb")
            .member("XC", "xb")
            .member("AA", "AA")
            .build()
            .unwrap();

        let validator = TagDeclarationValidator::new();
        assert_eq!(validator.check(&decl), validator.check(&decl));
    }

    #[test]
    fn test_merged_with() {
        let base = ValidatorConfig::default();
        assert_eq!(base.merged_with(None), base);

        let options = DeclarationOptions {
            strict: None,
            permit_standard_collisions: Some(true),
        };
        let merged = base.merged_with(Some(&options));
        assert!(merged.strict);
        assert!(merged.permit_standard_collisions);
    }
}
