use serde::{Deserialize, Serialize};

use crate::core::profile::Profile;

/// A named database entry holding one repeat count per STR
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub counts: Vec<usize>,
}

impl Record {
    pub fn new(name: impl Into<String>, counts: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            counts,
        }
    }

    /// True if every count equals the profile's count at the same position
    #[must_use]
    pub fn matches(&self, profile: &Profile) -> bool {
        self.counts == profile.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_requires_every_position() {
        let record = Record::new("Alice", vec![3, 5]);
        assert!(record.matches(&Profile::from(vec![3, 5])));
        assert!(!record.matches(&Profile::from(vec![3, 6])));
        assert!(!record.matches(&Profile::from(vec![4, 5])));
    }

    #[test]
    fn test_matches_rejects_prefix() {
        let record = Record::new("Bob", vec![3, 5]);
        assert!(!record.matches(&Profile::from(vec![3])));
    }
}
