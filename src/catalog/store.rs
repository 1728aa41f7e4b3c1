use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::record::Record;
use crate::core::sequence::Sequence;
use crate::parsing::database::parse_database_file;
use crate::parsing::ParseError;
use crate::utils::validation::is_json;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to load database: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to parse database JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database defines no STR patterns")]
    NoPatterns,

    #[error("STR pattern {index} is empty")]
    EmptyPattern { index: usize },

    #[error("STR pattern '{0}' is listed more than once")]
    DuplicatePattern(String),

    #[error("Record '{name}' has {found} counts but the database defines {expected} STRs")]
    RecordShape {
        name: String,
        expected: usize,
        found: usize,
    },
}

/// Database format version for JSON export
pub const DATABASE_VERSION: &str = "1.0.0";

/// Serializable database format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseData {
    pub version: String,
    pub created_at: String,
    pub patterns: Vec<Sequence>,
    pub records: Vec<Record>,
}

/// STR patterns plus the records whose counts follow that pattern order
#[derive(Debug, Clone)]
pub struct StrDatabase {
    patterns: Vec<Sequence>,

    records: Vec<Record>,

    /// Index: record name -> first record with that name
    name_to_index: HashMap<String, usize>,
}

impl StrDatabase {
    /// Create an empty database over the given STR patterns
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NoPatterns` for an empty pattern list,
    /// `CatalogError::EmptyPattern` if any pattern has no bases, or
    /// `CatalogError::DuplicatePattern` if a pattern is repeated.
    pub fn new(patterns: Vec<Sequence>) -> Result<Self, CatalogError> {
        if patterns.is_empty() {
            return Err(CatalogError::NoPatterns);
        }

        let mut seen = HashSet::new();
        for (index, pattern) in patterns.iter().enumerate() {
            if pattern.is_empty() {
                return Err(CatalogError::EmptyPattern { index });
            }
            if !seen.insert(pattern) {
                return Err(CatalogError::DuplicatePattern(pattern.to_string()));
            }
        }

        Ok(Self {
            patterns,
            records: Vec::new(),
            name_to_index: HashMap::new(),
        })
    }

    /// Load a database from a CSV file, or from a JSON export if the path ends in `.json`
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if the file cannot be read or is malformed,
    /// or `CatalogError::Json` for an invalid JSON export.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let db = if is_json(path) {
            let content = std::fs::read_to_string(path).map_err(ParseError::from)?;
            Self::from_json(&content)?
        } else {
            parse_database_file(path)?
        };
        debug!(
            "Loaded {} records over {} STRs from {}",
            db.len(),
            db.patterns.len(),
            path.display()
        );
        Ok(db)
    }

    /// Parse a database from its JSON export
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Json` for invalid JSON, or any of the shape errors
    /// from [`StrDatabase::new`] and [`StrDatabase::add_record`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: DatabaseData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != DATABASE_VERSION {
            warn!(
                "Database version mismatch (expected {}, found {})",
                DATABASE_VERSION, data.version
            );
        }

        let mut db = Self::new(data.patterns)?;
        for record in data.records {
            db.add_record(record)?;
        }
        Ok(db)
    }

    /// Export the database to JSON
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = DatabaseData {
            version: DATABASE_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            patterns: self.patterns.clone(),
            records: self.records.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Append a record, keeping database order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::RecordShape` if the record's count list does not
    /// have one entry per STR pattern.
    pub fn add_record(&mut self, record: Record) -> Result<(), CatalogError> {
        if record.counts.len() != self.patterns.len() {
            return Err(CatalogError::RecordShape {
                name: record.name,
                expected: self.patterns.len(),
                found: record.counts.len(),
            });
        }

        let index = self.records.len();
        self.name_to_index
            .entry(record.name.clone())
            .or_insert(index);
        self.records.push(record);
        Ok(())
    }

    /// STR patterns in column order
    #[must_use]
    pub fn patterns(&self) -> &[Sequence] {
        &self.patterns
    }

    /// Records in database order
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Get the first record with the given name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.name_to_index.get(name).map(|&idx| &self.records[idx])
    }

    /// Number of records in the database
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the database has no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(strs: &[&str]) -> Vec<Sequence> {
        strs.iter().map(|s| Sequence::parse(s).unwrap()).collect()
    }

    fn make_test_database() -> StrDatabase {
        let mut db = StrDatabase::new(patterns(&["AGATC", "AATG"])).unwrap();
        db.add_record(Record::new("Alice", vec![3, 5])).unwrap();
        db.add_record(Record::new("Bob", vec![3, 6])).unwrap();
        db
    }

    #[test]
    fn test_new_rejects_no_patterns() {
        assert!(matches!(
            StrDatabase::new(Vec::new()),
            Err(CatalogError::NoPatterns)
        ));
    }

    #[test]
    fn test_new_rejects_empty_pattern() {
        let result = StrDatabase::new(vec![Sequence::parse("AATG").unwrap(), Sequence::default()]);
        assert!(matches!(result, Err(CatalogError::EmptyPattern { index: 1 })));
    }

    #[test]
    fn test_new_rejects_duplicate_pattern() {
        let result = StrDatabase::new(patterns(&["AATG", "TATC", "AATG"]));
        match result {
            Err(CatalogError::DuplicatePattern(p)) => assert_eq!(p, "AATG"),
            other => panic!("Expected duplicate pattern error, got {other:?}"),
        }
    }

    #[test]
    fn test_add_record_shape_mismatch() {
        let mut db = make_test_database();
        let err = db.add_record(Record::new("Carol", vec![1])).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::RecordShape {
                expected: 2,
                found: 1,
                ..
            }
        ));
        assert_eq!(db.len(), 2);
    }

    #[test]
    fn test_get_by_name() {
        let db = make_test_database();
        assert_eq!(db.get("Bob").unwrap().counts, vec![3, 6]);
        assert!(db.get("Nobody").is_none());
    }

    #[test]
    fn test_get_returns_first_duplicate_name() {
        let mut db = make_test_database();
        db.add_record(Record::new("Alice", vec![9, 9])).unwrap();
        assert_eq!(db.get("Alice").unwrap().counts, vec![3, 5]);
    }

    #[test]
    fn test_json_export_and_import() {
        let db = make_test_database();
        let json = db.to_json().unwrap();

        assert!(json.contains("\"version\""));
        assert!(json.contains("\"AGATC\""));
        assert!(json.contains("Alice"));

        let reloaded = StrDatabase::from_json(&json).unwrap();
        assert_eq!(reloaded.patterns(), db.patterns());
        assert_eq!(reloaded.records(), db.records());
    }

    #[test]
    fn test_from_json_rejects_bad_record() {
        let json = r#"{
            "version": "1.0.0",
            "created_at": "2024-01-01T00:00:00Z",
            "patterns": ["AGATC", "AATG"],
            "records": [{"name": "Alice", "counts": [1, 2, 3]}]
        }"#;
        assert!(matches!(
            StrDatabase::from_json(json),
            Err(CatalogError::RecordShape { .. })
        ));
    }
}
