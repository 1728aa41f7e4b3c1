use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::nucleotide::Nucleotide;

/// A symbol outside {A, C, G, T} was found while building a [`Sequence`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid nucleotide '{symbol}' at position {position}")]
pub struct InvalidNucleotide {
    pub symbol: char,
    /// 0-based offset into the input text
    pub position: usize,
}

/// An ordered list of nucleotides.
///
/// Used both for the sample under test and for the STR patterns listed in a
/// database header. Sequences are immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sequence {
    bases: Vec<Nucleotide>,
}

impl Sequence {
    #[must_use]
    pub fn new(bases: Vec<Nucleotide>) -> Self {
        Self { bases }
    }

    /// Build a sequence from text, rejecting anything that is not an upper-case base.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidNucleotide`] for the first offending symbol.
    pub fn parse(text: &str) -> Result<Self, InvalidNucleotide> {
        text.char_indices()
            .map(|(position, symbol)| {
                u8::try_from(symbol)
                    .ok()
                    .and_then(Nucleotide::from_byte)
                    .ok_or(InvalidNucleotide { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// Build a sequence from raw ASCII bytes, with the same rules as [`Sequence::parse`]
    ///
    /// # Errors
    ///
    /// Returns [`InvalidNucleotide`] for the first offending byte.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, InvalidNucleotide> {
        bytes
            .iter()
            .enumerate()
            .map(|(position, &b)| {
                Nucleotide::from_byte(b).ok_or(InvalidNucleotide {
                    symbol: char::from(b),
                    position,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Nucleotide] {
        &self.bases
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for base in &self.bases {
            write!(f, "{base}")?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Sequence {
    type Error = InvalidNucleotide;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Sequence> for String {
    fn from(seq: Sequence) -> Self {
        seq.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let seq = Sequence::parse("AGATC").unwrap();
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.as_slice()[1], Nucleotide::G);
        assert_eq!(seq.to_string(), "AGATC");
    }

    #[test]
    fn test_parse_empty() {
        let seq = Sequence::parse("").unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn test_parse_rejects_lowercase_and_ambiguity_codes() {
        let err = Sequence::parse("AGaTC").unwrap_err();
        assert_eq!(err.symbol, 'a');
        assert_eq!(err.position, 2);

        let err = Sequence::parse("ACGN").unwrap_err();
        assert_eq!(err.symbol, 'N');
        assert_eq!(err.position, 3);
    }

    #[test]
    fn test_from_bytes() {
        assert_eq!(Sequence::from_bytes(b"AATG").unwrap().to_string(), "AATG");
        let err = Sequence::from_bytes(b"AAtG").unwrap_err();
        assert_eq!(err.symbol, 't');
        assert_eq!(err.position, 2);
    }

    #[test]
    fn test_serde_as_string() {
        let seq = Sequence::parse("AATG").unwrap();
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, "\"AATG\"");

        let back: Sequence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seq);
        assert!(serde_json::from_str::<Sequence>("\"AXTG\"").is_err());
    }
}
