//! Validate command - check every declaration in a file.

use std::path::PathBuf;

use colored::Colorize;
use samtags::{
    SamTagError, TagDeclarationValidator, ValidatorConfig, Violation, load_declarations,
};
use serde::Serialize;

#[derive(Serialize)]
struct DeclarationReport {
    name: String,
    members: usize,
    accepted: bool,
    violations: Vec<Violation>,
}

pub fn run(
    file: PathBuf,
    strict: bool,
    permit_standard_collisions: bool,
    json_output: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let config = ValidatorConfig::default()
        .with_strict(strict)
        .with_standard_collisions(permit_standard_collisions);
    let validator = TagDeclarationValidator::with_config(config);

    let declarations = load_declarations(&file)?;
    tracing::debug!(
        path = %file.display(),
        declarations = declarations.len(),
        "loaded tag declarations"
    );

    let mut reports = Vec::with_capacity(declarations.len());
    for declaration in declarations {
        let name = declaration.name().to_string();
        let members = declaration.len();
        let violations = match validator.validate(declaration) {
            Ok(_) => Vec::new(),
            Err(SamTagError::Rejected(rejected)) => rejected.violations().to_vec(),
            Err(e) => return Err(e.into()),
        };
        reports.push(DeclarationReport {
            name,
            members,
            accepted: violations.is_empty(),
            violations,
        });
    }

    let all_accepted = reports.iter().all(|r| r.accepted);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(all_accepted);
    }

    for report in &reports {
        if report.accepted {
            println!(
                "{} {} ({} tags)",
                "ok".green().bold(),
                report.name.white(),
                report.members
            );
            continue;
        }

        println!(
            "{} {}: The following SAM tags are invalid:",
            "error".red().bold(),
            report.name.white()
        );
        for violation in &report.violations {
            println!("  {} {}", format!("[{}]", violation.kind.label()).yellow(), violation);
        }
    }

    let rejected = reports.iter().filter(|r| !r.accepted).count();
    println!();
    if rejected == 0 {
        println!(
            "{}",
            format!("All {} declarations are valid.", reports.len()).green()
        );
    } else {
        println!(
            "{}",
            format!("{} of {} declarations rejected.", rejected, reports.len()).red()
        );
    }

    Ok(all_accepted)
}
