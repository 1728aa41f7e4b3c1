//! STR profiling and database matching.
//!
//! - [`longest_run`]: longest back-to-back run of one STR in a sample
//! - [`compute_profile`]: one longest-run count per database STR, in order
//! - [`search`] / [`find_match`]: first database record whose counts equal a profile
//! - [`MatchingEngine`]: the above bound to a loaded database
//!
//! ## Example
//!
//! ```rust
//! use str_solver::catalog::store::StrDatabase;
//! use str_solver::core::record::Record;
//! use str_solver::core::sequence::Sequence;
//! use str_solver::matching::MatchingEngine;
//!
//! let patterns = vec![Sequence::parse("AGATC").unwrap(), Sequence::parse("AATG").unwrap()];
//! let mut db = StrDatabase::new(patterns).unwrap();
//! db.add_record(Record::new("Alice", vec![3, 1])).unwrap();
//!
//! let sample = Sequence::parse("AGATCAGATCAGATCTTAATGC").unwrap();
//! let engine = MatchingEngine::new(&db);
//! let (profile, result) = engine.identify(&sample).unwrap();
//!
//! assert_eq!(profile.counts, vec![3, 1]);
//! assert_eq!(result.unwrap().record.name, "Alice");
//! ```
//!
//! Matching is exact: every count must agree, and the first such record in
//! database order wins.

pub mod engine;
pub mod repeat;

pub use engine::{find_match, search, MatchResult, MatchingEngine};
pub use repeat::{compute_profile, longest_run};
