//! Error types for the JD-Xi SysEx core.
//!
//! Only the encode side and explicit conversions return these. Decoding never
//! fails; it degrades to `Unknown` tags instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Address byte {index} out of range: 0x{value:02X} (must be <= 0x7F)")]
    AddressOutOfRange { index: usize, value: u32 },

    #[error("Value {value} out of range for {name}: expected {min}..={max}")]
    ValueOutOfRange {
        name: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Invalid partial: {0}")]
    InvalidPartial(String),

    #[error("Malformed nibbles: {0:02X?}")]
    MalformedNibbles(Vec<u8>),

    #[error("Missing data for {name}: expected {expected} bytes, got {actual}")]
    MissingData {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("No parameter table for area {area}, tone {tone}")]
    UnknownSection { area: String, tone: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
