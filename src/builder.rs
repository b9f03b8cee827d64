//! Builder for configuring and constructing a `JdxiCodec`.

use std::sync::Arc;

use jdxi_sysex::{CodecConfig, Decoder, Encoder, RegistrySet};
use tracing::debug;

use crate::codec::{JdxiCodec, JdxiCodecInner};
use crate::Result;

/// Registries are built here unless a shared set is passed in with
/// [`registries`](Self::registries), so several codecs (e.g. one per
/// connected device id) can share one set of tables.
///
/// # Example
///
/// ```
/// use jdxi::prelude::*;
///
/// let codec = JdxiCodec::builder()
///     .device_id(0x11)
///     .build()?;
/// assert_eq!(codec.config().device_id, 0x11);
/// # Ok::<(), jdxi::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct JdxiCodecBuilder {
    config: CodecConfig,
    registries: Option<Arc<RegistrySet>>,
}

impl JdxiCodecBuilder {
    /// Default: 0x10
    pub fn device_id(mut self, device_id: u8) -> Self {
        self.config.device_id = device_id;
        self
    }

    pub fn config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    pub fn registries(mut self, registries: Arc<RegistrySet>) -> Self {
        self.registries = Some(registries);
        self
    }

    pub fn build(self) -> Result<JdxiCodec> {
        self.config.validate()?;

        let registries = self
            .registries
            .unwrap_or_else(|| Arc::new(RegistrySet::new()));

        debug!("JD-Xi codec ready (device id 0x{:02X})", self.config.device_id);

        Ok(JdxiCodec {
            inner: Arc::new(JdxiCodecInner {
                encoder: Encoder::new(self.config.device_id),
                decoder: Decoder::new(registries.clone()),
                config: self.config,
                registries,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_default_build() {
        let codec = JdxiCodecBuilder::default().build().unwrap();
        assert_eq!(codec.config().device_id, 0x10);
    }

    #[test]
    fn test_invalid_device_id() {
        let result = JdxiCodecBuilder::default().device_id(0x42).build();
        assert!(matches!(
            result,
            Err(Error::Sysex(jdxi_sysex::Error::InvalidConfig(_)))
        ));
    }

    #[test]
    fn test_shared_registries() {
        let registries = Arc::new(RegistrySet::new());
        let a = JdxiCodecBuilder::default()
            .registries(registries.clone())
            .build()
            .unwrap();
        let b = JdxiCodecBuilder::default()
            .device_id(0x7F)
            .registries(registries.clone())
            .build()
            .unwrap();
        assert!(Arc::ptr_eq(a.registries(), b.registries()));
    }
}
