//! Centralized input limits and path helpers.

use std::path::Path;

/// Maximum number of records allowed in a single database (DOS protection)
pub const MAX_RECORDS: usize = 1_000_000;

/// Maximum number of bases allowed in a single sample (DOS protection)
pub const MAX_SEQUENCE_LENGTH: usize = 100_000_000;

/// Check if adding another record would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new record.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_record_limit(count: usize) -> Option<String> {
    if count >= MAX_RECORDS {
        Some(format!(
            "Too many records: adding another would exceed maximum of {MAX_RECORDS}"
        ))
    } else {
        None
    }
}

/// Check a sample length against the maximum allowed.
/// Returns an error message if the length is over the limit.
#[must_use]
pub fn check_sequence_length(len: usize) -> Option<String> {
    if len > MAX_SEQUENCE_LENGTH {
        Some(format!(
            "Sequence of {len} bases exceeds maximum of {MAX_SEQUENCE_LENGTH}"
        ))
    } else {
        None
    }
}

/// Check if the path is a gzip/bgzip compressed file
#[must_use]
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Check if the path has a `.json` extension
#[must_use]
pub fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}
