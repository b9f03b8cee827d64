//! # jdxi - Roland JD-Xi SysEx codec
//!
//! Encode parameter edits into JD-Xi exclusive messages and classify the
//! messages the synth sends back.
//!
//! ## Architecture
//!
//! jdxi is an umbrella crate over:
//! - **jdxi-sysex** - Protocol core (addressing, parameter tables, value
//!   conversion, DT1/RQ1 encoding, decoding)
//!
//! It adds [`JdxiCodec`], a cloneable front-end that owns the device id and a
//! shared set of parameter registries.
//!
//! ## Quick Start
//!
//! ```
//! use jdxi::prelude::*;
//!
//! let codec = JdxiCodec::builder().build()?;
//!
//! // +50.0 cents, in tenths of a cent
//! let msg = codec.encode_param(AreaTag::System, ToneTag::Common, "MASTER_TUNE", 500)?;
//! assert_eq!(msg.data.as_slice(), &[0x00, 0x05, 0x0F, 0x04]);
//!
//! let parsed = codec.decode(&msg.to_bytes());
//! assert_eq!(parsed.temporary_area, AreaTag::System);
//! assert_eq!(parsed.get("MASTER_TUNE"), Some(1524));
//! # Ok::<(), jdxi::Error>(())
//! ```

/// Re-export of jdxi-sysex for direct access
pub use jdxi_sysex as sysex;

pub use jdxi_sysex::{
    block_address, block_size, checksum, Address, AreaTag, CodecConfig, Command, ConversionKind,
    DataWidth, Decoder, Encoder, ParameterRegistry, ParameterSpec, ParsedResult, PartialRef,
    RegistrySet, Section, SysExMessage, ToneTag,
};

mod builder;
mod codec;
mod error;

pub use builder::JdxiCodecBuilder;
pub use codec::JdxiCodec;
pub use error::{Error, Result};

/// Convenience prelude for common imports
pub mod prelude {
    pub use crate::{JdxiCodec, JdxiCodecBuilder};

    pub use crate::sysex::{
        Address, AreaTag, ParameterSpec, ParsedResult, RegistrySet, SysExMessage, ToneTag,
    };
}
