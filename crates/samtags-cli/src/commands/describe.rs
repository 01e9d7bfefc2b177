//! Describe command - show one standard tag.

use colored::Colorize;
use samtags::StandardTag;

pub fn run(code: &str) -> Result<bool, Box<dyn std::error::Error>> {
    let tag: StandardTag = code.parse()?;

    println!("{} {}", tag.code().cyan().bold(), tag.summary());
    match (tag.format(), tag.value_type()) {
        (Some(format), Some(value_type)) => {
            println!("Format: {}", format.white());
            println!("Type:   {}", value_type.to_string().white());
        }
        _ => println!("{}", "Reserved for backwards compatibility.".dimmed()),
    }

    if tag.details() != tag.summary() {
        println!();
        println!("{}", tag.details());
    }

    Ok(true)
}
