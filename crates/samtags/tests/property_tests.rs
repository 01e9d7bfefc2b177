//! Property-based tests for the tag validator.
//!
//! Verifies, over generated tag values:
//! 1. **No panics**: validation never crashes on any input
//! 2. **Determinism**: the same declaration always yields the same result
//! 3. **Invariants**: shape, collision and convention rules hold
//!
//! ```bash
//! PROPTEST_CASES=10000 cargo test -p samtags --test property_tests
//! ```

use proptest::prelude::*;

use samtags::{
    TagDeclaration, TagDeclarationValidator, ValidatorConfig, ViolationKind, is_standard_tag,
    validate,
};

fn single(value: &str) -> TagDeclaration {
    TagDeclaration::builder("Generated")
        .member("TAG", value)
        .build()
        .unwrap()
}

// =============================================================================
// Test Strategies
// =============================================================================

/// Well-formed tags, standard or not.
fn well_formed_tag() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]"
}

/// Strings that are never well-formed tags.
fn malformed_tag() -> impl Strategy<Value = String> {
    prop_oneof![
        // Wrong length
        "[A-Za-z0-9]{0,1}",
        "[A-Za-z0-9]{3,8}",
        // Non-alphabetic first character
        "[0-9_\\-\\.][A-Za-z0-9]",
        // Non-alphanumeric second character
        "[A-Za-z][_\\-\\. ]",
    ]
}

/// Arbitrary member values.
fn any_value() -> impl Strategy<Value = String> {
    prop_oneof![well_formed_tag(), malformed_tag(), "\\PC{0,4}"]
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_well_formed_non_standard_accepted_when_lenient(tag in well_formed_tag()) {
        prop_assume!(!is_standard_tag(&tag));
        let config = ValidatorConfig::default().with_strict(false);
        prop_assert!(validate(single(&tag), config).is_ok());
    }

    #[test]
    fn prop_malformed_rejected_with_invalid_shape(tag in malformed_tag()) {
        for strict in [true, false] {
            let config = ValidatorConfig::default().with_strict(strict);
            let err = validate(single(&tag), config).unwrap_err();
            let rejected = err.as_rejection().unwrap();
            prop_assert_eq!(rejected.violations().len(), 1);
            prop_assert_eq!(rejected.violations()[0].kind, ViolationKind::InvalidShape);
        }
    }

    #[test]
    fn prop_strict_accepts_only_conventional(tag in well_formed_tag()) {
        prop_assume!(!is_standard_tag(&tag));
        let result = validate(single(&tag), ValidatorConfig::default());
        let conventional = tag.starts_with(['X', 'Y', 'Z'])
            || !tag.chars().any(|c| c.is_ascii_uppercase());
        prop_assert_eq!(result.is_ok(), conventional);
    }

    #[test]
    fn prop_duplicates_reported_once_per_value(tag in "[xyz][a-z0-9]", copies in 2usize..6) {
        let decl = (0..copies)
            .fold(TagDeclaration::builder("Generated"), |b, i| {
                b.member(format!("M{i}"), tag.clone())
            })
            .build()
            .unwrap();

        let err = TagDeclarationValidator::new().validate(decl).unwrap_err();
        let rejected = err.as_rejection().unwrap();
        prop_assert_eq!(rejected.violations().len(), 1);
        prop_assert_eq!(rejected.violations()[0].members.len(), copies);
    }

    #[test]
    fn prop_validation_is_deterministic(values in prop::collection::vec(any_value(), 0..12)) {
        let decl = values
            .iter()
            .enumerate()
            .fold(TagDeclaration::builder("Generated"), |b, (i, v)| {
                b.member(format!("M{i}"), v.clone())
            })
            .build()
            .unwrap();

        let validator = TagDeclarationValidator::new();
        let first = validator.check(&decl);
        let second = validator.check(&decl);
        prop_assert_eq!(&first, &second);

        match validator.validate(decl.clone()) {
            Ok(accepted) => {
                prop_assert!(first.is_empty());
                prop_assert_eq!(accepted, decl);
            }
            Err(err) => {
                prop_assert_eq!(err.as_rejection().unwrap().violations(), first.as_slice());
            }
        }
    }
}
