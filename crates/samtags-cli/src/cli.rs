//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// samtags: validate locally-defined SAM tags
#[derive(Parser)]
#[command(name = "samtags")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the tag declarations in a JSON file
    Validate {
        /// Path to a JSON file holding one declaration or an array of them
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Don't require local tags to be lowercase or start with X, Y, or Z
        #[arg(long)]
        no_strict: bool,

        /// Allow local tags that reuse a predefined standard tag
        #[arg(long)]
        permit_standard_collisions: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the predefined standard tags
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Describe a standard tag
    Describe {
        /// Two-character tag code
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Classify tag codes as standard, local, or invalid
    Check {
        /// Tag codes to classify
        #[arg(value_name = "CODE", required = true)]
        codes: Vec<String>,
    },
}
