//! samtags CLI - validate locally-defined SAM tags.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_level(true)
        .init();

    let result = match cli.command {
        Commands::Validate {
            file,
            no_strict,
            permit_standard_collisions,
            json,
        } => commands::validate::run(file, !no_strict, permit_standard_collisions, json),

        Commands::List { json } => commands::list::run(json),

        Commands::Describe { code } => commands::describe::run(&code),

        Commands::Check { codes } => commands::check::run(&codes),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
