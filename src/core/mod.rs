//! Core data types for STR profiling.
//!
//! - [`Nucleotide`]: a single base, one of A, C, G, T
//! - [`Sequence`]: an immutable list of nucleotides (a sample or an STR pattern)
//! - [`Profile`]: longest-run counts of each STR in a sample
//! - [`Record`]: a named database entry with one count per STR
//! - [`NucleotideCounts`]: per-base tally of a sample
//!
//! ## Shape invariant
//!
//! Every record in a database and every profile computed against it share the
//! same number and order of STRs. Comparisons between differently-shaped count
//! lists are rejected with [`ProfileError::InvalidProfile`].
//!
//! [`Nucleotide`]: nucleotide::Nucleotide
//! [`Sequence`]: sequence::Sequence
//! [`Profile`]: profile::Profile
//! [`ProfileError::InvalidProfile`]: profile::ProfileError::InvalidProfile
//! [`Record`]: record::Record
//! [`NucleotideCounts`]: composition::NucleotideCounts

pub mod composition;
pub mod nucleotide;
pub mod profile;
pub mod record;
pub mod sequence;
