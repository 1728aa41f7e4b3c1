use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::StrDatabase;
use crate::cli::output::write_profile;
use crate::cli::OutputFormat;
use crate::matching::engine::MatchingEngine;
use crate::parsing::dna::parse_dna_file;

#[derive(Args)]
pub struct ProfileArgs {
    /// STR database whose header defines the patterns to count
    #[arg(required = true)]
    pub database: PathBuf,

    /// DNA sample file
    #[arg(required = true)]
    pub dna: PathBuf,
}

/// Execute profile subcommand
///
/// # Errors
///
/// Returns an error if an input cannot be loaded or profiling fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ProfileArgs, format: OutputFormat) -> anyhow::Result<()> {
    let database = StrDatabase::load_from_file(&args.database)?;
    let sample = parse_dna_file(&args.dna)?;
    let profile = MatchingEngine::new(&database).profile(&sample)?;

    match format {
        OutputFormat::Text => {
            write_profile(&mut std::io::stdout().lock(), database.patterns(), &profile)?;
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = database
                .patterns()
                .iter()
                .zip(&profile.counts)
                .map(|(pattern, count)| serde_json::json!({ "str": pattern, "count": count }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("str\tcount");
            for (pattern, count) in database.patterns().iter().zip(&profile.counts) {
                println!("{pattern}\t{count}");
            }
        }
    }

    Ok(())
}
