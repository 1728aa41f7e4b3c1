//! Parser for DNA sample files.
//!
//! A sample file normally holds the whole sequence on its first line. If that
//! line is a FASTA header (`>`), the first record is read with noodles and its
//! sequence used instead. Gzip/bgzip input (`.gz`, `.bgz`) is decompressed.

use std::io::{BufRead, BufReader, Cursor, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;

use crate::core::sequence::Sequence;
use crate::parsing::ParseError;
use crate::utils::validation::{check_sequence_length, is_gzipped};

/// Parse a DNA sample file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read or decompressed, or
/// other parse errors if the content is invalid.
pub fn parse_dna_file(path: &Path) -> Result<Sequence, ParseError> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        parse_dna_reader(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        parse_dna_reader(BufReader::new(file))
    }
}

/// Parse DNA sample text
///
/// # Errors
///
/// See [`parse_dna_reader`].
pub fn parse_dna_text(text: &str) -> Result<Sequence, ParseError> {
    parse_dna_reader(text.as_bytes())
}

/// Parse a DNA sample from a buffered reader
///
/// # Errors
///
/// Returns `ParseError::Io` on a read failure (including invalid UTF-8 on the
/// first line), `ParseError::InvalidNucleotide` or
/// `ParseError::InvalidRecordSequence` for a symbol outside A/C/G/T,
/// `ParseError::Noodles` for a malformed FASTA record,
/// `ParseError::InvalidFormat` for a FASTA record with no sequence, or
/// `ParseError::SequenceTooLong` if the length limit is exceeded.
pub fn parse_dna_reader<R: BufRead>(mut reader: R) -> Result<Sequence, ParseError> {
    let mut line = String::new();
    let mut line_num = 0;
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(Sequence::default());
        }
        line_num += 1;
        if !line.trim().is_empty() {
            break;
        }
    }

    let first = line.trim();
    if first.starts_with('>') {
        // Put the definition line back in front of the rest of the input
        let header = Cursor::new(format!("{first}\n").into_bytes());
        let mut fasta_reader = fasta::io::Reader::new(BufReader::new(header.chain(reader)));
        return read_first_record(&mut fasta_reader);
    }

    check_length(first.len())?;
    Sequence::parse(first).map_err(|source| ParseError::InvalidNucleotide {
        line: line_num,
        source,
    })
}

/// Read the first record from a noodles FASTA reader
fn read_first_record<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Sequence, ParseError> {
    let record = reader
        .records()
        .next()
        .transpose()
        .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?
        .ok_or_else(|| ParseError::InvalidFormat("No sequences found in FASTA file".to_string()))?;

    let name = String::from_utf8_lossy(record.name()).to_string();
    let bases = record.sequence().as_ref();

    if bases.is_empty() {
        return Err(ParseError::InvalidFormat(format!(
            "FASTA record '{name}' has no sequence"
        )));
    }
    check_length(bases.len())?;

    Sequence::from_bytes(bases).map_err(|source| ParseError::InvalidRecordSequence { name, source })
}

fn check_length(len: usize) -> Result<(), ParseError> {
    match check_sequence_length(len) {
        Some(_) => Err(ParseError::SequenceTooLong(len)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;

    #[test]
    fn test_parse_single_line() {
        let seq = parse_dna_text("AGATCAGATCAGATCTT\n").unwrap();
        assert_eq!(seq.to_string(), "AGATCAGATCAGATCTT");
    }

    #[test]
    fn test_only_first_line_is_read() {
        let seq = parse_dna_text("AATG\nCCCC\n").unwrap();
        assert_eq!(seq.to_string(), "AATG");
    }

    #[test]
    fn test_leading_blank_lines_and_crlf() {
        let seq = parse_dna_text("\r\n\r\nTATC\r\n").unwrap();
        assert_eq!(seq.to_string(), "TATC");
    }

    #[test]
    fn test_empty_text_is_empty_sequence() {
        assert!(parse_dna_text("").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_symbol_reports_line() {
        let err = parse_dna_text("\nAGNTC\n").unwrap_err();
        match err {
            ParseError::InvalidNucleotide { line, source } => {
                assert_eq!(line, 2);
                assert_eq!(source.symbol, 'N');
                assert_eq!(source.position, 2);
            }
            other => panic!("Expected invalid nucleotide, got {other:?}"),
        }
    }

    #[test]
    fn test_fasta_record_is_concatenated() {
        let text = "\n>sample1 description\nAGATC\nAGATC\nTT\n>sample2\nGGGG\n";
        let seq = parse_dna_text(text).unwrap();
        assert_eq!(seq.to_string(), "AGATCAGATCTT");
    }

    #[test]
    fn test_fasta_without_sequence() {
        assert!(parse_dna_text(">empty\n>next\nACGT\n").is_err());
        assert!(parse_dna_text(">empty\n").is_err());
    }

    #[test]
    fn test_fasta_invalid_symbol_names_record() {
        let err = parse_dna_text(">sample1\nAGATC\nAGNTC\n").unwrap_err();
        match err {
            ParseError::InvalidRecordSequence { name, source } => {
                assert_eq!(name, "sample1");
                assert_eq!(source.symbol, 'N');
                assert_eq!(source.position, 7);
            }
            other => panic!("Expected invalid record sequence, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_gzipped_fasta_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.fa.gz");

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">sample\nAATGAATG\nC\n").unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let seq = parse_dna_file(&path).unwrap();
        assert_eq!(seq.to_string(), "AATGAATGC");
    }

    #[test]
    fn test_parse_non_utf8_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1.txt");
        std::fs::write(&path, [b'A', 0xFF, b'T', b'\n']).unwrap();

        let err = parse_dna_file(&path).unwrap_err();
        match err {
            ParseError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidData),
            other => panic!("Expected I/O error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_gzipped_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.txt.gz");

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"AATGAATGC\n").unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let seq = parse_dna_file(&path).unwrap();
        assert_eq!(seq.to_string(), "AATGAATGC");
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse_dna_file(Path::new("/nonexistent/sample.txt")).unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }
}
