//! Example: declare a tool's local SAM tags and validate them.
//!
//! Usage:
//!   cargo run --example declare_tags

use samtags::{
    LocalTagSet, StandardTag, TagDeclaration, TagDeclarationValidator, ValidatorConfig,
    local_tag_enum,
};

local_tag_enum! {
    /// Tags written by a UMI-aware duplicate marker.
    pub enum DuplexTag {
        RawUmi => "xr",
        CorrectedUmi => "xc",
        FamilySize => "XF",
        Strand => "xs",
    }
}

fn main() -> samtags::Result<()> {
    let decl = DuplexTag::validate(ValidatorConfig::default())?;
    println!("{} declares {} valid tags", decl.name(), decl.len());

    // Problems are reported together.
    let broken = TagDeclaration::builder("BrokenTag")
        .member("READ_GROUP", StandardTag::RG.code())
        .member("FIRST", "xa")
        .member("SECOND", "xa")
        .member("UPPER", "AB")
        .member("TOO_LONG", "abc")
        .build()?;

    if let Err(err) = TagDeclarationValidator::new().validate(broken) {
        println!("{err}");
    }

    Ok(())
}
