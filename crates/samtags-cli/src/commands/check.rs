//! Check command - classify individual tag codes.

use colored::Colorize;
use samtags::{TagCode, TagKind};

pub fn run(codes: &[String]) -> Result<bool, Box<dyn std::error::Error>> {
    let mut all_valid = true;

    for code in codes {
        match TagCode::parse(code) {
            Some(tag) => {
                let kind = tag.kind();
                let label = match kind {
                    TagKind::Standard => kind.label().cyan(),
                    TagKind::Local => kind.label().green(),
                    TagKind::UnconventionalLocal => kind.label().yellow(),
                };
                match tag.standard() {
                    Some(standard) => println!("{}  {}  {}", tag, label, standard.summary()),
                    None => println!("{}  {}", tag, label),
                }
            }
            None => {
                all_valid = false;
                println!("{:?}  {}", code, "invalid".red());
            }
        }
    }

    Ok(all_valid)
}
