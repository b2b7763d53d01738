//! `jot` CLI — format, validate, and convert Jot files from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Reformat a Jot file to stdout in canonical extended syntax
//! jot format config.jot
//!
//! # Check a file parses; prints OK or a diagnostic
//! jot validate config.jot
//!
//! # Convert a Jot file to strict JSON on stdout
//! jot to-json config.jot
//!
//! # Print the version
//! jot version
//! ```
//!
//! On a parse failure the diagnostic goes to stderr and the exit status is
//! non-zero; no partial output is written.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::process;

#[derive(Parser)]
#[command(name = "jot", about = "Jot (extended JSON) file utility")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reformat a Jot file in canonical extended syntax
    Format {
        /// Input file
        file: String,
    },
    /// Check that a Jot file parses
    Validate {
        /// Input file
        file: String,
    },
    /// Convert a Jot file to strict JSON
    ToJson {
        /// Input file
        file: String,
    },
    /// Print the version
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Format { file } => {
            let doc = parse_file(&file)?;
            println!("{}", jot_format::to_string(&doc));
        }
        Commands::Validate { file } => {
            parse_file(&file)?;
            println!("OK");
        }
        Commands::ToJson { file } => {
            let doc = parse_file(&file)?;
            println!("{}", jot_format::to_json_string(&doc));
        }
        Commands::Version => {
            println!("jot {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn parse_file(path: &str) -> Result<jot_format::JotValue> {
    let source = fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    match jot_format::from_str(&source) {
        Ok(doc) => Ok(doc),
        Err(err) => {
            eprintln!("{path}: {err}");
            process::exit(1);
        }
    }
}
