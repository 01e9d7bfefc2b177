//! Typed enumerations of locally-defined SAM tags.
//!
//! [`local_tag_enum!`](crate::local_tag_enum) declares a plain Rust enum whose
//! variants carry tag values, and implements [`LocalTagSet`] for it so the
//! whole set can be validated once, typically at program start or in a test:
//!
//! ```
//! use samtags::{local_tag_enum, LocalTagSet, ValidatorConfig};
//!
//! local_tag_enum! {
//!     /// Tags written by the consensus caller.
//!     pub enum ConsensusTag {
//!         Depth => "cd",
//!         Errors => "ce",
//!         Umi => "XU",
//!     }
//! }
//!
//! assert_eq!(ConsensusTag::Umi.as_str(), "XU");
//! assert!(ConsensusTag::validate(ValidatorConfig::default()).is_ok());
//! ```

use crate::declaration::TagDeclaration;
use crate::error::Result;
use crate::validator::{ValidatorConfig, validate};

/// A closed set of locally-defined tags backed by a Rust enum.
pub trait LocalTagSet: Sized + Copy + 'static {
    /// Declaration name, the enum's type name.
    const NAME: &'static str;

    /// Every member in declaration order.
    fn members() -> &'static [Self];

    /// Name of this member's variant.
    fn member_name(&self) -> &'static str;

    /// Tag value of this member.
    fn tag(&self) -> &'static str;

    /// The member whose value is `tag`, if any.
    fn from_tag(tag: &str) -> Option<Self> {
        Self::members().iter().copied().find(|m| m.tag() == tag)
    }

    /// The enum as an untyped declaration.
    fn declaration() -> Result<TagDeclaration> {
        Self::members()
            .iter()
            .fold(TagDeclaration::builder(Self::NAME), |builder, m| {
                builder.member(m.member_name(), m.tag())
            })
            .build()
    }

    /// Validate every member of the enum.
    fn validate(config: ValidatorConfig) -> Result<TagDeclaration> {
        validate(Self::declaration()?, config)
    }
}

/// Declare an enum of locally-defined SAM tags.
///
/// Generates the enum with `ALL`, `as_str()` and `Display`, plus a
/// [`LocalTagSet`] implementation. See the [module docs](crate::local).
#[macro_export]
macro_rules! local_tag_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every member in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// The tag value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $value, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::LocalTagSet for $name {
            const NAME: &'static str = stringify!($name);

            fn members() -> &'static [Self] {
                Self::ALL
            }

            fn member_name(&self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant), )+
                }
            }

            fn tag(&self) -> &'static str {
                self.as_str()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::ViolationKind;

    local_tag_enum! {
        enum GoodTag {
            Xb => "xb",
            Xg => "XG",
        }
    }

    local_tag_enum! {
        enum BadTag {
            First => "xb",
            Second => "xb",
            Upper => "AA",
        }
    }

    #[test]
    fn test_generated_enum() {
        assert_eq!(GoodTag::ALL, &[GoodTag::Xb, GoodTag::Xg]);
        assert_eq!(GoodTag::Xg.as_str(), "XG");
        assert_eq!(GoodTag::Xb.to_string(), "xb");
        assert_eq!(GoodTag::Xg.member_name(), "Xg");
        assert_eq!(GoodTag::from_tag("XG"), Some(GoodTag::Xg));
        assert_eq!(GoodTag::from_tag("XH"), None);
    }

    #[test]
    fn test_declaration() {
        let decl = GoodTag::declaration().unwrap();
        assert_eq!(decl.name(), "GoodTag");
        assert_eq!(decl.members()[1].name, "Xg");
        assert_eq!(decl.members()[1].value, "XG");
    }

    #[test]
    fn test_validate() {
        assert!(GoodTag::validate(ValidatorConfig::default()).is_ok());

        let err = BadTag::validate(ValidatorConfig::default()).unwrap_err();
        let rejected = err.as_rejection().unwrap();
        assert_eq!(rejected.declaration(), "BadTag");
        assert_eq!(rejected.of_kind(ViolationKind::DuplicateTagValue).count(), 1);
        assert_eq!(
            rejected.of_kind(ViolationKind::NonConventionalLocalTag).count(),
            1
        );

        let lenient = ValidatorConfig::default().with_strict(false);
        let err = BadTag::validate(lenient).unwrap_err();
        assert_eq!(err.as_rejection().unwrap().violations().len(), 1);
    }
}
