//! Input validation for watchlist fields.
//!
//! The rules are checked in a fixed order: presence of both fields, then the
//! name pattern, then the year pattern. Validation runs when a record enters
//! the collection; records already in the store are not re-checked on load.

use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Letters and whitespace only.
#[allow(clippy::expect_used)]
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("name pattern compiles"));

/// Exactly four digits.
#[allow(clippy::expect_used)]
static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}$").expect("year pattern compiles"));

/// Validates a name/year pair.
///
/// # Errors
///
/// Returns `MissingFields` if either field is empty, `InvalidName` when the
/// name contains anything besides letters and whitespace, and `InvalidYear`
/// when the year is not exactly four digits.
pub fn validate_entry(name: &str, year: &str) -> Result<()> {
    if name.is_empty() || year.is_empty() {
        return Err(Error::MissingFields);
    }
    if !NAME_PATTERN.is_match(name) {
        return Err(Error::InvalidName(name.to_string()));
    }
    if !YEAR_PATTERN.is_match(year) {
        return Err(Error::InvalidYear(year.to_string()));
    }
    Ok(())
}
