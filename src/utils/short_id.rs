//! Parsing of the `:id` path segment.

use crate::error::AppError;

/// Parses a short URL identifier from a path segment.
///
/// Reads the integer at the start of the segment: leading whitespace is
/// skipped, then an optional sign and the longest run of ASCII digits.
/// Trailing characters are ignored, so `1abc`, `1.0` and `1e3` all name
/// entry 1. Only a segment with no leading digits is
/// [`AppError::InvalidIdentifier`].
///
/// # Returns
///
/// - `Ok(Some(id))` for a positive identifier
/// - `Ok(None)` for an integer that no entry can carry (zero, negative, or
///   beyond `u64`)
pub fn parse_short_id(raw: &str) -> Result<Option<u64>, AppError> {
    let unsigned = raw.trim_start();
    let (negative, unsigned) = match unsigned.as_bytes().first() {
        Some(b'-') => (true, &unsigned[1..]),
        Some(b'+') => (false, &unsigned[1..]),
        _ => (false, unsigned),
    };

    let digit_count = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return Err(AppError::InvalidIdentifier(raw.to_string()));
    }

    if negative {
        return Ok(None);
    }

    Ok(unsigned[..digit_count]
        .parse::<u64>()
        .ok()
        .filter(|&id| id > 0))
}
