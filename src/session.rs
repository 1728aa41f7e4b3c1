//! Session state for interactive profiling.
//!
//! A [`Session`] owns what has been loaded so far: the STR database, the DNA
//! sample, and the profile computed from them. Each operation checks its own
//! preconditions and reports the first one missing as a [`SessionError`].
//! Loading a new database or sample discards the current profile.

use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::catalog::store::{CatalogError, StrDatabase};
use crate::core::composition::NucleotideCounts;
use crate::core::profile::{Profile, ProfileError};
use crate::core::sequence::Sequence;
use crate::matching::engine::{MatchResult, MatchingEngine};
use crate::parsing::dna::parse_dna_file;
use crate::parsing::ParseError;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No database loaded.")]
    NoDatabase,

    #[error("No DNA loaded.")]
    NoSample,

    #[error("No DNA processed.")]
    NoProfile,

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Profile(#[from] ProfileError),
}

impl SessionError {
    /// True if the input file is missing or not readable by this user.
    /// Files that open but fail to decode are not included.
    #[must_use]
    pub fn is_unopenable(&self) -> bool {
        let (Self::Parse(ParseError::Io(e)) | Self::Catalog(CatalogError::Parse(ParseError::Io(e)))) =
            self
        else {
            return false;
        };
        matches!(e.kind(), ErrorKind::NotFound | ErrorKind::PermissionDenied)
    }
}

/// One command of the interactive shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadDatabase(String),
    LoadDna(String),
    Display,
    Process,
    Search,
    CountNucleotides,
    Exit,
    Empty,
    Unknown(String),
}

impl Command {
    /// Parse a shell line: a command word, optionally followed by a space and a file name
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, arg) = match line.split_once(' ') {
            Some((word, arg)) => (word, arg.trim()),
            None => (line, ""),
        };

        match word {
            "" => Self::Empty,
            "#" => Self::Exit,
            "load_db" => Self::LoadDatabase(arg.to_string()),
            "load_dna" => Self::LoadDna(arg.to_string()),
            "display" => Self::Display,
            "process" => Self::Process,
            "search" => Self::Search,
            "count_nucleotides" => Self::CountNucleotides,
            other => Self::Unknown(other.to_string()),
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    database: Option<StrDatabase>,
    sample: Option<Sequence>,
    profile: Option<Profile>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn database_loaded(&self) -> bool {
        self.database.is_some()
    }

    #[must_use]
    pub fn sample_loaded(&self) -> bool {
        self.sample.is_some()
    }

    #[must_use]
    pub fn profile_computed(&self) -> bool {
        self.profile.is_some()
    }

    #[must_use]
    pub fn database(&self) -> Option<&StrDatabase> {
        self.database.as_ref()
    }

    #[must_use]
    pub fn sample(&self) -> Option<&Sequence> {
        self.sample.as_ref()
    }

    #[must_use]
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Load a database file, replacing any loaded database.
    /// On failure the session is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Catalog` if the file cannot be loaded.
    pub fn load_database(&mut self, path: &Path) -> Result<&StrDatabase, SessionError> {
        let db = StrDatabase::load_from_file(path)?;
        info!(
            "Loaded database {} ({} records, {} STRs)",
            path.display(),
            db.len(),
            db.patterns().len()
        );
        Ok(self.set_database(db))
    }

    /// Load a DNA sample file, replacing any loaded sample.
    /// On failure the session is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Parse` if the file cannot be loaded.
    pub fn load_sample(&mut self, path: &Path) -> Result<&Sequence, SessionError> {
        let sample = parse_dna_file(path)?;
        info!("Loaded DNA {} ({} bases)", path.display(), sample.len());
        Ok(self.set_sample(sample))
    }

    pub fn set_database(&mut self, database: StrDatabase) -> &StrDatabase {
        self.profile = None;
        self.database.insert(database)
    }

    pub fn set_sample(&mut self, sample: Sequence) -> &Sequence {
        self.profile = None;
        self.sample.insert(sample)
    }

    /// Check that both a database and a sample are loaded
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoDatabase` or `SessionError::NoSample`.
    pub fn ensure_inputs(&self) -> Result<(), SessionError> {
        self.require_inputs().map(|_| ())
    }

    fn require_inputs(&self) -> Result<(&StrDatabase, &Sequence), SessionError> {
        let database = self.database.as_ref().ok_or(SessionError::NoDatabase)?;
        let sample = self.sample.as_ref().ok_or(SessionError::NoSample)?;
        Ok((database, sample))
    }

    /// Compute the sample profile, replacing any earlier one
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoDatabase` or `SessionError::NoSample` if an input
    /// is missing, or `SessionError::Profile` if profiling fails.
    pub fn process(&mut self) -> Result<&Profile, SessionError> {
        let (database, sample) = self.require_inputs()?;
        let profile = MatchingEngine::new(database).profile(sample)?;
        Ok(&*self.profile.insert(profile))
    }

    /// Search the database for the computed profile
    ///
    /// # Errors
    ///
    /// Returns the first missing precondition (database, sample, profile), or
    /// `SessionError::Profile` on a shape mismatch.
    pub fn search(&self) -> Result<Option<MatchResult>, SessionError> {
        let (database, _) = self.require_inputs()?;
        let profile = self.profile.as_ref().ok_or(SessionError::NoProfile)?;
        Ok(MatchingEngine::new(database).search(profile)?)
    }

    /// Tally the bases of the loaded sample
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoDatabase` or `SessionError::NoSample` if an input
    /// is missing.
    pub fn count_nucleotides(&self) -> Result<NucleotideCounts, SessionError> {
        let (_, sample) = self.require_inputs()?;
        Ok(NucleotideCounts::tally(sample))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::Record;

    fn make_test_database() -> StrDatabase {
        let patterns = vec![
            Sequence::parse("AGATC").unwrap(),
            Sequence::parse("AATG").unwrap(),
        ];
        let mut db = StrDatabase::new(patterns).unwrap();
        db.add_record(Record::new("Alice", vec![3, 1])).unwrap();
        db
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(
            Command::parse("load_db small.txt"),
            Command::LoadDatabase("small.txt".to_string())
        );
        assert_eq!(
            Command::parse("load_dna  1.txt \r"),
            Command::LoadDna("1.txt".to_string())
        );
        assert_eq!(Command::parse("display"), Command::Display);
        assert_eq!(Command::parse("#"), Command::Exit);
        assert_eq!(Command::parse("   "), Command::Empty);
        assert_eq!(Command::parse("load_db"), Command::LoadDatabase(String::new()));
        assert_eq!(
            Command::parse("frobnicate now"),
            Command::Unknown("frobnicate".to_string())
        );
    }

    #[test]
    fn test_preconditions_in_order() {
        let mut session = Session::new();
        assert!(matches!(session.process(), Err(SessionError::NoDatabase)));
        assert!(matches!(session.search(), Err(SessionError::NoDatabase)));

        session.set_database(make_test_database());
        assert!(matches!(session.process(), Err(SessionError::NoSample)));
        assert!(matches!(session.count_nucleotides(), Err(SessionError::NoSample)));

        session.set_sample(Sequence::parse("AGATCAGATCAGATCTTAATGC").unwrap());
        assert!(matches!(session.search(), Err(SessionError::NoProfile)));
    }

    #[test]
    fn test_process_then_search() {
        let mut session = Session::new();
        session.set_database(make_test_database());
        session.set_sample(Sequence::parse("AGATCAGATCAGATCTTAATGC").unwrap());

        assert_eq!(session.process().unwrap().counts, vec![3, 1]);
        assert!(session.profile_computed());

        let result = session.search().unwrap().unwrap();
        assert_eq!(result.record.name, "Alice");
    }

    #[test]
    fn test_reloading_sample_discards_profile() {
        let mut session = Session::new();
        session.set_database(make_test_database());
        session.set_sample(Sequence::parse("AGATCAGATCAGATCTTAATGC").unwrap());
        session.process().unwrap();

        session.set_sample(Sequence::parse("AATGAATGC").unwrap());
        assert!(!session.profile_computed());
        assert!(matches!(session.search(), Err(SessionError::NoProfile)));

        // Reprocessing replaces rather than appends
        assert_eq!(session.process().unwrap().counts, vec![0, 2]);
    }

    #[test]
    fn test_failed_load_keeps_state() {
        let mut session = Session::new();
        session.set_database(make_test_database());

        let err = session
            .load_database(Path::new("/nonexistent/db.csv"))
            .unwrap_err();
        assert!(err.is_unopenable());
        assert!(session.database_loaded());
    }

    #[test]
    fn test_undecodable_file_is_not_unopenable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1.txt");
        std::fs::write(&path, [b'A', 0xFF, b'T', b'\n']).unwrap();

        let mut session = Session::new();
        let err = session.load_sample(&path).unwrap_err();
        assert!(matches!(err, SessionError::Parse(ParseError::Io(_))));
        assert!(!err.is_unopenable());
        assert!(!session.sample_loaded());
    }

    #[test]
    fn test_count_nucleotides() {
        let mut session = Session::new();
        session.set_database(make_test_database());
        session.set_sample(Sequence::parse("AATGC").unwrap());
        assert_eq!(session.count_nucleotides().unwrap().as_array(), [2, 1, 1, 1]);
    }
}
