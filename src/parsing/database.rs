use std::path::Path;

use crate::catalog::store::StrDatabase;
use crate::core::record::Record;
use crate::core::sequence::Sequence;
use crate::parsing::ParseError;
use crate::utils::validation::check_record_limit;

/// Parse a CSV database file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_database_file(path: &Path) -> Result<StrDatabase, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_database_text(&content)
}

/// Parse CSV database text.
///
/// The first non-blank line is the header; its first column (conventionally
/// `name`) is ignored and the rest are STR patterns. Each following line is a
/// record name followed by one count per STR.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` for a missing header, a malformed STR
/// column, a non-integer count, or a row with the wrong number of counts;
/// `ParseError::InvalidNucleotide` for a pattern with a bad base; or
/// `ParseError::TooManyRecords` if the limit is exceeded.
pub fn parse_database_text(text: &str) -> Result<StrDatabase, ParseError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| ParseError::InvalidFormat("Database file is empty".to_string()))?;

    let patterns = parse_header(header_line, header)?;
    let mut db = StrDatabase::new(patterns)
        .map_err(|e| ParseError::InvalidFormat(format!("Line {header_line}: {e}")))?;

    for (line_num, line) in lines {
        if check_record_limit(db.len()).is_some() {
            return Err(ParseError::TooManyRecords(db.len()));
        }

        let record = parse_record(line_num, line)?;
        db.add_record(record)
            .map_err(|e| ParseError::InvalidFormat(format!("Line {line_num}: {e}")))?;
    }

    Ok(db)
}

fn parse_header(line_num: usize, line: &str) -> Result<Vec<Sequence>, ParseError> {
    let mut fields = line.split(',').map(str::trim);

    // Leading "name" column
    fields.next();

    fields
        .enumerate()
        .map(|(i, field)| {
            if field.is_empty() {
                return Err(ParseError::InvalidFormat(format!(
                    "Line {line_num}: STR column {} is empty",
                    i + 1
                )));
            }
            Sequence::parse(field).map_err(|source| ParseError::InvalidNucleotide {
                line: line_num,
                source,
            })
        })
        .collect()
}

fn parse_record(line_num: usize, line: &str) -> Result<Record, ParseError> {
    let mut fields = line.split(',').map(str::trim);

    let name = fields.next().unwrap_or_default();
    if name.is_empty() {
        return Err(ParseError::InvalidFormat(format!(
            "Line {line_num}: record name is empty"
        )));
    }

    let counts = fields
        .map(|field| {
            field.parse::<usize>().map_err(|_| {
                ParseError::InvalidFormat(format!(
                    "Line {line_num}: invalid repeat count '{field}'"
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Record::new(name, counts))
}
