//! Longest consecutive-repeat counting for STR patterns.
//!
//! The scan compares the sample against the pattern from a start anchor. On a
//! mismatch it records the number of whole pattern lengths matched since the
//! anchor, then restarts one position after the anchor (not after the
//! mismatch). A streak still open when the sample runs out is never recorded.
//! Existing databases were built with these counts, so both rules are kept.

use tracing::debug;

use crate::core::profile::{Profile, ProfileError};
use crate::core::sequence::Sequence;

/// Run lengths (in whole pattern units) recorded at each mismatch during the scan.
///
/// Entries appear in the order the mismatches happen. The streak in progress when
/// the sample ends is not included.
///
/// # Errors
///
/// Returns `ProfileError::InvalidPattern` if `pattern` is empty.
pub fn recorded_runs(sample: &Sequence, pattern: &Sequence) -> Result<Vec<usize>, ProfileError> {
    let sample = sample.as_slice();
    let pattern = pattern.as_slice();
    if pattern.is_empty() {
        return Err(ProfileError::InvalidPattern { index: 0 });
    }

    let mut runs = Vec::new();
    let mut i = 0;
    let mut j = 0;
    let mut streak = 0;
    let mut anchor = 0;

    while i < sample.len() {
        if j == pattern.len() {
            j = 0;
        }

        if sample[i] == pattern[j] {
            i += 1;
            j += 1;
            streak += 1;
        } else {
            runs.push(streak / pattern.len());
            streak = 0;
            j = 0;
            anchor += 1;
            i = anchor;
        }
    }

    Ok(runs)
}

/// Longest run of back-to-back copies of `pattern` in `sample`.
///
/// Returns 0 when no run was ever recorded, including samples too short to
/// produce a mismatch.
///
/// # Errors
///
/// Returns `ProfileError::InvalidPattern` if `pattern` is empty.
pub fn longest_run(sample: &Sequence, pattern: &Sequence) -> Result<usize, ProfileError> {
    let runs = recorded_runs(sample, pattern)?;
    Ok(runs.into_iter().max().unwrap_or(0))
}

/// Apply [`longest_run`] once per pattern, in pattern order.
///
/// # Errors
///
/// Returns `ProfileError::InvalidPattern` naming the first empty pattern.
pub fn compute_profile(sample: &Sequence, patterns: &[Sequence]) -> Result<Profile, ProfileError> {
    let counts = patterns
        .iter()
        .enumerate()
        .map(|(index, pattern)| {
            let count = longest_run(sample, pattern).map_err(|e| match e {
                ProfileError::InvalidPattern { .. } => ProfileError::InvalidPattern { index },
                other => other,
            })?;
            debug!("{pattern}: {count}");
            Ok(count)
        })
        .collect::<Result<Vec<usize>, ProfileError>>()?;

    Ok(Profile::new(counts))
}
