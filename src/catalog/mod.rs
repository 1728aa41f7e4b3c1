//! STR database storage.
//!
//! A [`StrDatabase`] is the ordered list of STR patterns from a database header
//! together with the ordered list of [`Record`]s whose counts follow that
//! pattern order. Databases are built once per load and not mutated afterwards.
//!
//! ## Example
//!
//! ```rust
//! use str_solver::catalog::store::StrDatabase;
//! use str_solver::core::record::Record;
//! use str_solver::core::sequence::Sequence;
//!
//! let patterns = vec![Sequence::parse("AGATC").unwrap(), Sequence::parse("AATG").unwrap()];
//! let mut db = StrDatabase::new(patterns).unwrap();
//! db.add_record(Record::new("Alice", vec![3, 5])).unwrap();
//! assert_eq!(db.len(), 1);
//! ```
//!
//! [`StrDatabase`]: store::StrDatabase
//! [`Record`]: crate::core::record::Record

pub mod store;
