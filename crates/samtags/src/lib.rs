//! samtags: declare and validate locally-defined SAM tags.
//!
//! SAM records carry optional fields keyed by two-character tags. The SAMtags
//! specification predefines a set of standard tags and reserves the rest for
//! tools, which by convention use tags starting with `X`, `Y` or `Z`, or
//! lowercase tags. This crate provides:
//!
//! - **Catalog**: the predefined [`StandardTag`]s with their value types and
//!   descriptions
//! - **Validation**: a [`TagDeclarationValidator`] that checks a group of
//!   local tags for shape, uniqueness, collisions with standard tags and the
//!   local naming convention, reporting every violation at once
//! - **Typed enums**: [`local_tag_enum!`] to declare tags as a Rust enum and
//!   validate them through [`LocalTagSet`]
//!
//! # Example
//!
//! ```
//! use samtags::{TagDeclaration, TagDeclarationValidator};
//!
//! let decl = TagDeclaration::builder("CustomTag")
//!     .member("XG", "XG")
//!     .member("RAW_UMI", "xr")
//!     .build()
//!     .unwrap();
//!
//! let decl = TagDeclarationValidator::new().validate(decl).unwrap();
//! assert_eq!(decl.len(), 2);
//! ```

pub mod declaration;
pub mod error;
pub mod local;
pub mod standard;
pub mod tag;
pub mod validator;

pub use declaration::{
    DeclarationOptions, TagDeclaration, TagDeclarationBuilder, TagMember, load_declarations,
};
pub use error::{Result, SamTagError};
pub use local::LocalTagSet;
pub use standard::{StandardTag, ValueType, describe, is_standard_tag};
pub use tag::{TagCode, TagKind, is_conventional_local, is_valid_shape};
pub use validator::{
    DeclarationRejected, TagDeclarationValidator, ValidatorConfig, Violation, ViolationKind,
    validate,
};
