//! List command - print the standard tag catalog.

use colored::Colorize;
use samtags::StandardTag;
use serde_json::json;

pub fn run(json_output: bool) -> Result<bool, Box<dyn std::error::Error>> {
    if json_output {
        let tags: Vec<_> = StandardTag::ALL
            .iter()
            .map(|tag| {
                json!({
                    "code": tag,
                    "type": tag.value_type(),
                    "format": tag.format(),
                    "reserved": tag.is_reserved(),
                    "summary": tag.summary(),
                    "details": tag.details(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&tags)?);
        return Ok(true);
    }

    for tag in StandardTag::ALL {
        let value_type = tag
            .value_type()
            .map(|t| t.code().to_string())
            .unwrap_or_else(|| "-".to_string());
        let summary = if tag.is_reserved() {
            tag.summary().dimmed()
        } else {
            tag.summary().normal()
        };
        println!("{}  {}  {}", tag.code().cyan().bold(), value_type, summary);
    }

    Ok(true)
}
