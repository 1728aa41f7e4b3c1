use std::path::PathBuf;

use clap::Args;

use crate::cli::output::write_nucleotide_counts;
use crate::cli::OutputFormat;
use crate::core::composition::NucleotideCounts;
use crate::parsing::dna::parse_dna_file;

#[derive(Args)]
pub struct CountArgs {
    /// DNA sample file
    #[arg(required = true)]
    pub dna: PathBuf,
}

/// Execute count subcommand
///
/// # Errors
///
/// Returns an error if the sample cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CountArgs, format: OutputFormat) -> anyhow::Result<()> {
    let sample = parse_dna_file(&args.dna)?;
    let counts = NucleotideCounts::tally(&sample);

    match format {
        OutputFormat::Text => write_nucleotide_counts(&mut std::io::stdout().lock(), &counts)?,
        OutputFormat::Json => {
            let output = serde_json::json!({
                "counts": counts,
                "total": counts.total(),
                "max": counts.max(),
                "min": counts.min(),
                "average": counts.average(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("A\tT\tG\tC\ttotal");
            println!(
                "{}\t{}\t{}\t{}\t{}",
                counts.a,
                counts.t,
                counts.g,
                counts.c,
                counts.total()
            );
        }
    }

    Ok(())
}
