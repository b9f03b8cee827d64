//! Centralized error type for the jdxi umbrella crate.
//!
//! Wraps the protocol core's errors so `?` propagates naturally across crate boundaries.

use jdxi_sysex::{AreaTag, ToneTag};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Sysex(#[from] jdxi_sysex::Error),

    #[error("Unknown parameter {name} in {area} {tone}")]
    UnknownParameter {
        area: AreaTag,
        tone: ToneTag,
        name: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
