//! Text renderings shared by the subcommands and the interactive shell.

use std::io::{self, Write};

use crate::catalog::store::StrDatabase;
use crate::core::composition::NucleotideCounts;
use crate::core::profile::Profile;
use crate::core::sequence::Sequence;
use crate::matching::engine::MatchResult;

/// One line per record: the name followed by its counts
pub fn write_database(w: &mut impl Write, db: &StrDatabase) -> io::Result<()> {
    for record in db.records() {
        let counts: Vec<String> = record.counts.iter().map(ToString::to_string).collect();
        writeln!(w, "{} {}", record.name, counts.join(" "))?;
    }
    Ok(())
}

/// One `<STR>: <count>` line per pattern
pub fn write_profile(w: &mut impl Write, patterns: &[Sequence], profile: &Profile) -> io::Result<()> {
    for (pattern, count) in patterns.iter().zip(&profile.counts) {
        writeln!(w, "{pattern}: {count}")?;
    }
    Ok(())
}

pub fn write_match(w: &mut impl Write, result: Option<&MatchResult>) -> io::Result<()> {
    match result {
        Some(m) => writeln!(w, "Found in database! DNA matches: {}", m.record.name),
        None => writeln!(w, "Not found in database."),
    }
}

pub fn write_nucleotide_counts(w: &mut impl Write, counts: &NucleotideCounts) -> io::Result<()> {
    writeln!(w, "Nucleotides counted. Stats: ")?;
    writeln!(w, "A count: {}", counts.a)?;
    writeln!(w, "T count: {}", counts.t)?;
    writeln!(w, "G count: {}", counts.g)?;
    writeln!(w, "C count: {}", counts.c)?;
    writeln!(w, "Total counts: {}", counts.total())?;
    writeln!(w, "Max count: {}", counts.max())?;
    writeln!(w, "Min count: {}", counts.min())?;
    writeln!(w, "Average nucleotide count: {}", counts.average())
}
