use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::store::StrDatabase;
use crate::cli::output::write_database;
use crate::cli::OutputFormat;

#[derive(Args)]
pub struct DatabaseArgs {
    #[command(subcommand)]
    pub command: DatabaseCommands,
}

#[derive(Subcommand)]
pub enum DatabaseCommands {
    /// List the STR patterns and records of a database
    Show {
        /// Database file (CSV or JSON export)
        #[arg(required = true)]
        database: PathBuf,
    },

    /// Show a single record by name
    Get {
        /// Database file (CSV or JSON export)
        #[arg(required = true)]
        database: PathBuf,

        /// Record name
        #[arg(required = true)]
        name: String,
    },

    /// Export a database to JSON
    Export {
        /// Database file to export
        #[arg(required = true)]
        database: PathBuf,

        /// Output file path
        #[arg(required = true)]
        output: PathBuf,
    },
}

/// Execute database subcommand
///
/// # Errors
///
/// Returns an error if the database cannot be loaded, a named record is
/// missing, or the export cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DatabaseArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        DatabaseCommands::Show { database } => {
            let db = StrDatabase::load_from_file(&database)?;
            match format {
                OutputFormat::Text => {
                    let patterns: Vec<String> = db.patterns().iter().map(ToString::to_string).collect();
                    println!("STRs: {}", patterns.join(" "));
                    println!("Records: {}", db.len());
                    write_database(&mut std::io::stdout().lock(), &db)?;
                }
                OutputFormat::Json => println!("{}", db.to_json()?),
                OutputFormat::Tsv => {
                    let patterns: Vec<String> = db.patterns().iter().map(ToString::to_string).collect();
                    println!("name\t{}", patterns.join("\t"));
                    for record in db.records() {
                        let counts: Vec<String> = record.counts.iter().map(ToString::to_string).collect();
                        println!("{}\t{}", record.name, counts.join("\t"));
                    }
                }
            }
        }
        DatabaseCommands::Get { database, name } => {
            let db = StrDatabase::load_from_file(&database)?;
            let record = db
                .get(&name)
                .ok_or_else(|| anyhow::anyhow!("Record '{name}' not found in database"))?;

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
                OutputFormat::Text | OutputFormat::Tsv => {
                    for (pattern, count) in db.patterns().iter().zip(&record.counts) {
                        println!("{pattern}\t{count}");
                    }
                }
            }
        }
        DatabaseCommands::Export { database, output } => {
            let db = StrDatabase::load_from_file(&database)?;
            std::fs::write(&output, db.to_json()?)?;
            if verbose {
                eprintln!("Exported {} records to {}", db.len(), output.display());
            }
        }
    }

    Ok(())
}
