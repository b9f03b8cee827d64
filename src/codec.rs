//! The codec front-end: one handle for encoding and decoding.

use std::sync::Arc;

use jdxi_sysex::{
    block_address, Address, AreaTag, CodecConfig, Decoder, Encoder, ParameterRegistry,
    ParameterSpec, ParsedResult, RegistrySet, SysExMessage, ToneTag,
};

use crate::builder::JdxiCodecBuilder;
use crate::{Error, Result};

pub(crate) struct JdxiCodecInner {
    pub(crate) config: CodecConfig,
    pub(crate) registries: Arc<RegistrySet>,
    pub(crate) encoder: Encoder,
    pub(crate) decoder: Decoder,
}

/// Encoder and decoder over one shared set of parameter tables.
///
/// Cheap to clone; clones share the same tables and can be used from any
/// thread (e.g. a UI thread encoding while a MIDI thread decodes).
#[derive(Clone)]
pub struct JdxiCodec {
    pub(crate) inner: Arc<JdxiCodecInner>,
}

impl std::fmt::Debug for JdxiCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JdxiCodec")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl JdxiCodec {
    pub fn builder() -> JdxiCodecBuilder {
        JdxiCodecBuilder::default()
    }

    #[inline]
    pub fn config(&self) -> &CodecConfig {
        &self.inner.config
    }

    #[inline]
    pub fn registries(&self) -> &Arc<RegistrySet> {
        &self.inner.registries
    }

    /// DT1 for `spec` inside the block starting at `block`.
    pub fn encode(&self, block: Address, value: i64, spec: &ParameterSpec) -> Result<SysExMessage> {
        Ok(self.inner.encoder.encode(block, value, spec)?)
    }

    /// DT1 for the parameter called `name` in the `(area, tone)` block.
    pub fn encode_param(
        &self,
        area: AreaTag,
        tone: ToneTag,
        name: &str,
        value: i64,
    ) -> Result<SysExMessage> {
        let block = block_address(area, tone)?;
        let spec = self
            .resolve(area, tone, name)
            .ok_or_else(|| Error::UnknownParameter {
                area,
                tone,
                name: name.to_string(),
            })?;
        self.encode(block, value, spec)
    }

    /// RQ1 for the whole `(area, tone)` block.
    pub fn request_block(&self, area: AreaTag, tone: ToneTag) -> Result<SysExMessage> {
        Ok(self.inner.encoder.request_block(area, tone)?)
    }

    /// Never fails; unrecognised input comes back with `Unknown` tags.
    pub fn decode(&self, bytes: &[u8]) -> ParsedResult {
        self.inner.decoder.decode(bytes)
    }

    pub fn registry_for(&self, area: AreaTag, tone: ToneTag) -> Option<&ParameterRegistry> {
        self.inner.registries.registry_for(area, tone)
    }

    pub fn resolve(&self, area: AreaTag, tone: ToneTag, name: &str) -> Option<&ParameterSpec> {
        self.inner.registries.resolve(area, tone, name)
    }
}
