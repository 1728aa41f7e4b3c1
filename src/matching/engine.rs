use serde::Serialize;
use tracing::debug;

use crate::catalog::store::StrDatabase;
use crate::core::profile::{Profile, ProfileError};
use crate::core::record::Record;
use crate::core::sequence::Sequence;
use crate::matching::repeat::compute_profile;

/// A database record whose counts equal the sample profile
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    /// The matched record
    pub record: Record,

    /// Position of the record in database order
    pub index: usize,
}

/// First record, in input order, whose full count list equals `profile`.
///
/// Callers are responsible for the profile and records sharing one STR order;
/// see [`search`] for the checked entry point.
#[must_use]
pub fn find_match<'r>(profile: &Profile, records: &'r [Record]) -> Option<(usize, &'r Record)> {
    records
        .iter()
        .enumerate()
        .find(|(_, record)| record.matches(profile))
}

/// Search a database for a record matching `profile`
///
/// # Errors
///
/// Returns `ProfileError::InvalidProfile` if the profile does not have one count
/// per database STR.
pub fn search(profile: &Profile, database: &StrDatabase) -> Result<Option<MatchResult>, ProfileError> {
    profile.ensure_len(database.patterns().len())?;

    let result = find_match(profile, database.records()).map(|(index, record)| MatchResult {
        record: record.clone(),
        index,
    });

    match &result {
        Some(m) => debug!("Profile matches record {} ('{}')", m.index, m.record.name),
        None => debug!("No record among {} matches the profile", database.len()),
    }

    Ok(result)
}

/// Profiles samples against a database and searches it
pub struct MatchingEngine<'a> {
    database: &'a StrDatabase,
}

impl<'a> MatchingEngine<'a> {
    #[must_use]
    pub fn new(database: &'a StrDatabase) -> Self {
        Self { database }
    }

    /// Compute a sample's profile over the database STRs
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::InvalidPattern` if a database STR is empty.
    pub fn profile(&self, sample: &Sequence) -> Result<Profile, ProfileError> {
        compute_profile(sample, self.database.patterns())
    }

    /// Find the record matching a previously computed profile
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::InvalidProfile` on a shape mismatch.
    pub fn search(&self, profile: &Profile) -> Result<Option<MatchResult>, ProfileError> {
        search(profile, self.database)
    }

    /// Profile a sample and search for it in one step
    ///
    /// # Errors
    ///
    /// Returns any error from [`MatchingEngine::profile`] or [`MatchingEngine::search`].
    pub fn identify(&self, sample: &Sequence) -> Result<(Profile, Option<MatchResult>), ProfileError> {
        let profile = self.profile(sample)?;
        let result = self.search(&profile)?;
        Ok((profile, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_database() -> StrDatabase {
        let patterns = vec![
            Sequence::parse("AGATC").unwrap(),
            Sequence::parse("AATG").unwrap(),
        ];
        let mut db = StrDatabase::new(patterns).unwrap();
        db.add_record(Record::new("Alice", vec![3, 5])).unwrap();
        db.add_record(Record::new("Bob", vec![3, 6])).unwrap();
        db
    }

    #[test]
    fn test_find_match_first_exact() {
        let db = make_test_database();
        let (index, record) = find_match(&Profile::from(vec![3, 5]), db.records()).unwrap();
        assert_eq!(index, 0);
        assert_eq!(record.name, "Alice");
    }

    #[test]
    fn test_find_match_not_found() {
        let db = make_test_database();
        assert!(find_match(&Profile::from(vec![4, 4]), db.records()).is_none());
    }

    #[test]
    fn test_find_match_partial_agreement_is_not_a_match() {
        let db = make_test_database();
        // First position agrees with both records, second with neither
        assert!(find_match(&Profile::from(vec![3, 7]), db.records()).is_none());
    }

    #[test]
    fn test_find_match_first_wins_on_tie() {
        let records = vec![
            Record::new("Carol", vec![1, 2]),
            Record::new("Dave", vec![2, 2]),
            Record::new("Erin", vec![2, 2]),
        ];
        let (index, record) = find_match(&Profile::from(vec![2, 2]), &records).unwrap();
        assert_eq!(index, 1);
        assert_eq!(record.name, "Dave");
    }

    #[test]
    fn test_find_match_empty_database() {
        assert!(find_match(&Profile::from(vec![1]), &[]).is_none());
    }

    #[test]
    fn test_search_rejects_wrong_length() {
        let db = make_test_database();
        assert_eq!(
            search(&Profile::from(vec![3]), &db).unwrap_err(),
            ProfileError::InvalidProfile {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_search_empty_database_is_not_found() {
        let db = StrDatabase::new(vec![Sequence::parse("AATG").unwrap()]).unwrap();
        assert!(search(&Profile::from(vec![0]), &db).unwrap().is_none());
    }

    #[test]
    fn test_engine_identify() {
        let db = make_test_database();
        let engine = MatchingEngine::new(&db);

        let sample = Sequence::parse(&format!(
            "AGATCAGATCAGATCTT{}C",
            "AATG".repeat(6)
        ))
        .unwrap();
        let (profile, result) = engine.identify(&sample).unwrap();

        assert_eq!(profile.counts, vec![3, 6]);
        let result = result.unwrap();
        assert_eq!(result.record.name, "Bob");
        assert_eq!(result.index, 1);
    }

    #[test]
    fn test_engine_identify_no_match() {
        let db = make_test_database();
        let engine = MatchingEngine::new(&db);

        let sample = Sequence::parse("AGATCAGATCTTAATGC").unwrap();
        let (profile, result) = engine.identify(&sample).unwrap();
        assert_eq!(profile.counts, vec![2, 1]);
        assert!(result.is_none());
    }
}
