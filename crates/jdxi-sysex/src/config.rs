//! Codec configuration.

use crate::error::{Error, Result};
use crate::message::{BROADCAST_DEVICE_ID, DEFAULT_DEVICE_ID};
use serde::{Deserialize, Serialize};

/// Settings shared by the encode and decode paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Roland device id written into outgoing messages (`0x10`-`0x1F`, or `0x7F` broadcast).
    pub device_id: u8,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            device_id: DEFAULT_DEVICE_ID,
        }
    }
}

impl CodecConfig {
    pub fn validate(&self) -> Result<()> {
        match self.device_id {
            0x10..=0x1F | BROADCAST_DEVICE_ID => Ok(()),
            other => Err(Error::InvalidConfig(format!(
                "device id 0x{other:02X} (expected 0x10-0x1F or 0x7F)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_device_id() {
        let config = CodecConfig::default();
        assert_eq!(config.device_id, 0x10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_device_id() {
        assert!(CodecConfig { device_id: 0x1F }.validate().is_ok());
        assert!(CodecConfig { device_id: 0x7F }.validate().is_ok());
        assert!(matches!(
            CodecConfig { device_id: 0x20 }.validate(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(CodecConfig { device_id: 0x00 }.validate().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = CodecConfig { device_id: 0x13 };
        let encoded = bincode::serialize(&config).unwrap();
        let decoded: CodecConfig = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, config);
    }
}
