//! Input parsing
//!
//! Turns raw console text into typed command fields.

use crate::error::{Result, ShelfError};

/// Parse a book id
///
/// Surrounding whitespace is ignored. Any `u64` is accepted; `0` matches
/// no stored record and so reports not-found. Negative numbers are
/// rejected since ids are unsigned.
pub fn parse_id(raw: &str) -> Result<u64> {
    let trimmed = raw.trim();
    if let Ok(id) = trimmed.parse::<u64>() {
        return Ok(id);
    }

    let negative = trimmed
        .strip_prefix('-')
        .is_some_and(|digits| digits.parse::<u64>().is_ok());

    if negative {
        Err(ShelfError::InvalidInput(format!(
            "book ID cannot be negative, got {}",
            trimmed
        )))
    } else {
        Err(ShelfError::InvalidInput(format!(
            "'{}' is not a valid book ID",
            trimmed
        )))
    }
}

/// Parse a publication year
pub fn parse_year(raw: &str) -> Result<i32> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|_| ShelfError::InvalidInput(format!("'{}' is not a valid year", trimmed)))
}
