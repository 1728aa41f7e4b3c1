use serde::Serialize;

use crate::core::nucleotide::Nucleotide;
use crate::core::sequence::Sequence;

/// Per-base tally of a sample, reported in A, T, G, C order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NucleotideCounts {
    pub a: usize,
    pub t: usize,
    pub g: usize,
    pub c: usize,
}

impl NucleotideCounts {
    #[must_use]
    pub fn tally(sequence: &Sequence) -> Self {
        let mut counts = Self::default();
        for base in sequence.as_slice() {
            match base {
                Nucleotide::A => counts.a += 1,
                Nucleotide::T => counts.t += 1,
                Nucleotide::G => counts.g += 1,
                Nucleotide::C => counts.c += 1,
            }
        }
        counts
    }

    /// Counts as an array in A, T, G, C order
    #[must_use]
    pub fn as_array(&self) -> [usize; 4] {
        [self.a, self.t, self.g, self.c]
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.as_array().iter().sum()
    }

    #[must_use]
    pub fn max(&self) -> usize {
        self.as_array().into_iter().max().unwrap_or(0)
    }

    #[must_use]
    pub fn min(&self) -> usize {
        self.as_array().into_iter().min().unwrap_or(0)
    }

    /// Mean count per base, truncated; a fraction of a nucleotide is not reported
    #[must_use]
    pub fn average(&self) -> usize {
        self.total() / 4
    }
}
