//! Parsers for STR databases and DNA samples.
//!
//! - **Database CSV**: a header line `name,<STR>,<STR>,...` followed by one
//!   `<name>,<count>,<count>,...` line per person
//! - **DNA text**: a single line of bases, or the first record of a FASTA
//!   file read with noodles; `.gz`/`.bgz` files are decompressed
//!
//! ## Example
//!
//! ```rust
//! use str_solver::parsing::database::parse_database_text;
//! use str_solver::parsing::dna::parse_dna_text;
//!
//! let db = parse_database_text("name,AGATC,AATG\nAlice,2,8\n").unwrap();
//! let sample = parse_dna_text("AGATCAGATCTT\n").unwrap();
//! assert_eq!(db.patterns().len(), 2);
//! assert_eq!(sample.len(), 12);
//! ```

use thiserror::Error;

use crate::core::sequence::InvalidNucleotide;

pub mod database;
pub mod dna;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Line {line}: {source}")]
    InvalidNucleotide {
        line: usize,
        #[source]
        source: InvalidNucleotide,
    },

    #[error("FASTA record '{name}': {source}")]
    InvalidRecordSequence {
        name: String,
        #[source]
        source: InvalidNucleotide,
    },

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Too many records: {0} exceeds maximum allowed (1000000)")]
    TooManyRecords(usize),

    #[error("Sequence too long: {0} bases exceeds maximum allowed (100000000)")]
    SequenceTooLong(usize),
}
