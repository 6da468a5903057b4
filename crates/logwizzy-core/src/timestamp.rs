//! Decoder for journal `__REALTIME_TIMESTAMP` tokens.
//!
//! The token is a decimal count of microseconds since the Unix epoch. Stray
//! non-digit characters are dropped while accumulating, so `"1,700,000"` and
//! `"1700000"` decode to the same instant. A token without any digit fails.

use crate::error::DecodeError;
use chrono::{DateTime, Utc};

/// Decode a microsecond-epoch token into an absolute instant.
pub fn decode(token: &str) -> Result<DateTime<Utc>, DecodeError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(DecodeError::Empty);
    }

    let mut micros: i64 = 0;
    let mut digits = 0usize;
    for d in token.chars().filter_map(|c| c.to_digit(10)) {
        micros = micros
            .checked_mul(10)
            .and_then(|v| v.checked_add(i64::from(d)))
            .ok_or_else(|| DecodeError::Overflow(token.to_string()))?;
        digits += 1;
    }
    if digits == 0 {
        return Err(DecodeError::NoDigits(token.to_string()));
    }

    DateTime::from_timestamp_micros(micros).ok_or(DecodeError::OutOfRange(micros))
}
