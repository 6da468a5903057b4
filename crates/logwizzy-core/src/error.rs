//! Error types for logwizzy-core.

/// Why a realtime timestamp token could not be decoded.
///
/// Never fatal: the aggregator substitutes the current time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("empty timestamp")]
    Empty,
    #[error("timestamp {0:?} contains no digits")]
    NoDigits(String),
    #[error("timestamp {0:?} overflows a 64-bit microsecond count")]
    Overflow(String),
    #[error("timestamp {0} is outside the representable range")]
    OutOfRange(i64),
}
