use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("STR pattern {index} is empty")]
    InvalidPattern { index: usize },

    #[error("Profile has {found} counts but the database defines {expected} STRs")]
    InvalidProfile { expected: usize, found: usize },
}

/// Longest-run counts of each STR in a sample, in database pattern order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub counts: Vec<usize>,
}

impl Profile {
    #[must_use]
    pub fn new(counts: Vec<usize>) -> Self {
        Self { counts }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Check that this profile lines up with a pattern list of `expected` entries
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::InvalidProfile` if the lengths differ.
    pub fn ensure_len(&self, expected: usize) -> Result<(), ProfileError> {
        if self.counts.len() == expected {
            Ok(())
        } else {
            Err(ProfileError::InvalidProfile {
                expected,
                found: self.counts.len(),
            })
        }
    }
}

impl From<Vec<usize>> for Profile {
    fn from(counts: Vec<usize>) -> Self {
        Self::new(counts)
    }
}
