//! Command-line interface for str-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **identify**: Profile a DNA sample and find the matching database record
//! - **profile**: Print a sample's longest-run count for each database STR
//! - **count**: Tally the nucleotides of a sample
//! - **database**: Show, query, or export an STR database
//! - **shell**: Interactive session (`load_db`, `load_dna`, `process`, `search`, ...)
//!
//! ## Usage
//!
//! ```text
//! # Identify a sample
//! str-solver identify small.csv 1.txt
//!
//! # JSON output for scripting
//! str-solver identify small.csv 1.txt --format json
//!
//! # STR counts only
//! str-solver profile large.csv 15.txt
//!
//! # Interactive session
//! str-solver shell
//! ```

use clap::{Parser, Subcommand};

pub mod count;
pub mod database;
pub mod identify;
pub mod output;
pub mod profile;
pub mod shell;

#[derive(Parser)]
#[command(name = "str-solver")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Identify DNA samples by their short tandem repeat (STR) profile")]
#[command(
    long_about = "str-solver counts the longest run of consecutive repeats of each STR in a DNA sample and looks up the database record whose counts match exactly.\n\nDatabases are CSV files with a `name,<STR>,<STR>,...` header and one row of counts per person."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the database record matching a DNA sample
    Identify(identify::IdentifyArgs),

    /// Print the STR counts of a DNA sample
    Profile(profile::ProfileArgs),

    /// Count the nucleotides in a DNA sample
    Count(count::CountArgs),

    /// Inspect or export an STR database
    Database(database::DatabaseArgs),

    /// Start an interactive session
    Shell(shell::ShellArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
