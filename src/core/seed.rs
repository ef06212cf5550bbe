//! Puzzle Seed Derivation
//!
//! Maps a canonical `YYYY-MM-DD` date string to the 32-bit seed that drives
//! dungeon generation, and numbers puzzles from the launch date.

use chrono::NaiveDate;
use thiserror::Error;

use crate::LAUNCH_DATE;

/// Format of canonical date strings.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Error raised for a date string that is not canonical `YYYY-MM-DD`.
#[derive(Debug, Clone, Error)]
pub enum DateError {
    /// The string did not parse as a calendar date.
    #[error("invalid date string: {0:?}")]
    Invalid(String),
}

/// Derive the generation seed from a date string.
///
/// Rolling hash over the string's characters: starting from 0, each step is
/// `hash * 31 + code` in wrapping 32-bit signed arithmetic; the seed is the
/// unsigned absolute value of the final hash.
///
/// This function is a compatibility contract: the same date must map to the
/// same seed in every process and on every platform, because the seed
/// defines the published daily puzzle. It accepts any string; validity of
/// the date itself is the caller's concern.
pub fn date_seed(date: &str) -> u32 {
    let mut hash: i32 = 0;
    for c in date.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(c as i32);
    }
    hash.unsigned_abs()
}

/// Puzzle number for a date: days since launch, starting at 1.
///
/// The launch date itself is puzzle #1. Dates before launch yield zero or
/// negative numbers; the shell decides what to do with those.
pub fn puzzle_number(date: &str) -> Result<i64, DateError> {
    let day = parse_date(date)?;
    let launch = NaiveDate::parse_from_str(LAUNCH_DATE, DATE_FORMAT)
        .map_err(|_| DateError::Invalid(LAUNCH_DATE.to_string()))?;
    Ok((day - launch).num_days() + 1)
}

/// Parse a canonical `YYYY-MM-DD` string.
pub fn parse_date(date: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| DateError::Invalid(date.to_string()))
}

// =============================================================================
// TESTS
// =============================================================================
