// trf7970a-rs/trf7970a/src/error.rs

use thiserror::Error;

/// Crate-wide error type.
///
/// The decoder itself never fails: malformed bus traffic degrades to
/// missing or placeholder output. These variants cover the typed edges of
/// the crate (strict conversions, checked constructors, event sources).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("not a command instruction: {0:#04x}")]
    NotACommand(u8),

    #[error("not an address instruction: {0:#04x}")]
    NotAnAddress(u8),

    #[error("invalid timespan: end {end} precedes start {start}")]
    InvalidTimespan { start: u64, end: u64 },

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("event source error: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, Error>;
