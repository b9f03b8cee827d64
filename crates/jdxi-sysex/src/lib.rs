//! Roland JD-Xi SysEx protocol core.
//!
//! Builds outgoing DT1/RQ1 messages from parameter names and display values,
//! and classifies incoming messages into a temporary area, a tone block and a
//! flat map of raw parameter values.
//!
//! ```
//! use std::sync::Arc;
//! use jdxi_sysex::{Decoder, Encoder, RegistrySet, AreaTag, ToneTag};
//!
//! let registries = Arc::new(RegistrySet::new());
//! let cutoff = registries
//!     .resolve(AreaTag::Digital1, ToneTag::Partial(1), "FILTER_CUTOFF")
//!     .unwrap();
//! let block = jdxi_sysex::block_address(AreaTag::Digital1, ToneTag::Partial(1))?;
//! let bytes = Encoder::default().encode(block, 64, cutoff)?.to_bytes();
//!
//! let parsed = Decoder::new(registries).decode(&bytes);
//! assert_eq!(parsed.synth_tone, ToneTag::Partial(1));
//! assert_eq!(parsed.get("FILTER_CUTOFF"), Some(64));
//! # Ok::<(), jdxi_sysex::Error>(())
//! ```

pub mod address;
pub mod config;
pub mod convert;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod message;
pub mod params;
pub mod registry;
pub mod spec;
pub mod tags;

pub use address::{Address, PartialRef};
pub use config::CodecConfig;
pub use decoder::{Decoder, ParsedResult};
pub use encoder::{block_address, block_size, Encoder};
pub use error::{Error, Result};
pub use message::{checksum, Command, SysExMessage};
pub use params::Section;
pub use registry::{ParameterRegistry, RegistrySet};
pub use spec::{ConversionKind, DataWidth, ParameterSpec};
pub use tags::{AreaTag, ToneTag};
