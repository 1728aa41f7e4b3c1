//! # str-solver
//!
//! A library for identifying DNA samples by their short tandem repeat (STR) profile.
//!
//! An STR is a short nucleotide pattern (e.g. `AGATC`) that appears many times
//! back to back in some regions of the genome. How many times it repeats varies
//! between people, so the longest run of each of a handful of STRs works as an
//! identifier.
//!
//! `str-solver` computes that profile for a sample and looks it up in a database
//! of known people.
//!
//! ## Features
//!
//! - **Repeat counting**: longest consecutive run of each STR, in database order
//! - **Exact matching**: first record whose counts all agree with the profile
//! - **Interactive shell**: load, process, search, and display step by step
//! - **Nucleotide tally**: per-base counts with simple statistics
//!
//! ## Example
//!
//! ```rust
//! use str_solver::parsing::database::parse_database_text;
//! use str_solver::parsing::dna::parse_dna_text;
//! use str_solver::MatchingEngine;
//!
//! let db = parse_database_text("name,AGATC,AATG\nAlice,3,5\nBob,3,6\n").unwrap();
//! let sample = parse_dna_text(&format!("AGATCAGATCAGATCTT{}C", "AATG".repeat(5))).unwrap();
//!
//! let engine = MatchingEngine::new(&db);
//! let (profile, result) = engine.identify(&sample).unwrap();
//!
//! assert_eq!(profile.counts, vec![3, 5]);
//! assert_eq!(result.unwrap().record.name, "Alice");
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: STR database storage
//! - [`core`]: Sequences, profiles, records, and nucleotide tallies
//! - [`matching`]: Repeat counting and profile matching
//! - [`parsing`]: Parsers for database and DNA files
//! - [`session`]: Interactive session state
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod session;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::store::StrDatabase;
pub use core::profile::{Profile, ProfileError};
pub use core::record::Record;
pub use core::sequence::Sequence;
pub use matching::engine::{MatchResult, MatchingEngine};
pub use session::Session;
