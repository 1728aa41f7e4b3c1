use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::StrDatabase;
use crate::cli::output::{write_match, write_profile};
use crate::cli::OutputFormat;
use crate::core::profile::Profile;
use crate::core::sequence::Sequence;
use crate::matching::engine::{MatchResult, MatchingEngine};
use crate::parsing::dna::parse_dna_file;

#[derive(Args)]
pub struct IdentifyArgs {
    /// STR database (CSV with a `name,<STR>,...` header, or a JSON export)
    #[arg(required = true)]
    pub database: PathBuf,

    /// DNA sample file (single line, FASTA, optionally gzipped)
    #[arg(required = true)]
    pub dna: PathBuf,

    /// Also print the sample's STR counts
    #[arg(long)]
    pub show_profile: bool,
}

/// Execute identify subcommand
///
/// # Errors
///
/// Returns an error if an input cannot be loaded or profiling fails. A sample
/// with no matching record is not an error.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: IdentifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let database = StrDatabase::load_from_file(&args.database)?;
    let sample = parse_dna_file(&args.dna)?;

    if verbose {
        eprintln!(
            "Loaded {} records over {} STRs; sample has {} bases",
            database.len(),
            database.patterns().len(),
            sample.len()
        );
    }

    if database.is_empty() {
        eprintln!("Warning: Database is empty, no records to match against.");
    }

    let engine = MatchingEngine::new(&database);
    let (profile, result) = engine.identify(&sample)?;

    match format {
        OutputFormat::Text => print_text_result(&args, &database, &profile, result.as_ref())?,
        OutputFormat::Json => print_json_result(&args, &database, &sample, &profile, result.as_ref())?,
        OutputFormat::Tsv => print_tsv_result(&profile, result.as_ref()),
    }

    Ok(())
}

fn print_text_result(
    args: &IdentifyArgs,
    database: &StrDatabase,
    profile: &Profile,
    result: Option<&MatchResult>,
) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    if args.show_profile {
        write_profile(&mut out, database.patterns(), profile)?;
    }
    write_match(&mut out, result)?;
    Ok(())
}

fn print_json_result(
    args: &IdentifyArgs,
    database: &StrDatabase,
    sample: &Sequence,
    profile: &Profile,
    result: Option<&MatchResult>,
) -> anyhow::Result<()> {
    let counts: serde_json::Map<String, serde_json::Value> = database
        .patterns()
        .iter()
        .zip(&profile.counts)
        .map(|(pattern, count)| (pattern.to_string(), serde_json::json!(count)))
        .collect();

    let output = serde_json::json!({
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "database": {
            "path": args.database.display().to_string(),
            "records": database.len(),
            "patterns": database.patterns(),
        },
        "sample": {
            "path": args.dna.display().to_string(),
            "length": sample.len(),
        },
        "profile": counts,
        "match": result.map(|m| serde_json::json!({
            "name": m.record.name,
            "index": m.index,
        })),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_result(profile: &Profile, result: Option<&MatchResult>) {
    let counts: Vec<String> = profile.counts.iter().map(ToString::to_string).collect();
    println!("match\tindex\tcounts");
    match result {
        Some(m) => println!("{}\t{}\t{}", m.record.name, m.index, counts.join(",")),
        None => println!("\t\t{}", counts.join(",")),
    }
}
