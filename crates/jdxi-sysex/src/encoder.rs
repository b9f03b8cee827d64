//! Outgoing DT1/RQ1 messages.
//!
//! An [`Encoder`] owns nothing but the device id, so it is `Copy` and can be
//! handed to any thread that needs to build messages.

use crate::address::Address;
use crate::convert;
use crate::error::{Error, Result};
use crate::message::{Command, Payload, SysExMessage, DEFAULT_DEVICE_ID};
use crate::registry::section_for;
use crate::spec::ParameterSpec;
use crate::tags::{self, AreaTag, ToneTag};
use smallvec::SmallVec;
use tracing::trace;

/// Largest size an RQ1 can ask for (four 7-bit bytes).
pub const MAX_REQUEST_SIZE: u32 = (1 << 28) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    device_id: u8,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new(DEFAULT_DEVICE_ID)
    }
}

impl Encoder {
    pub fn new(device_id: u8) -> Self {
        Self { device_id }
    }

    #[inline]
    pub fn device_id(&self) -> u8 {
        self.device_id
    }

    /// DT1 setting one parameter inside the block starting at `block`.
    ///
    /// The parameter's linear offset is added to `block` with 7-bit carry, so drum
    /// partial and effect parameters past `0x7F` land in the next group byte.
    pub fn encode(&self, block: Address, value: i64, spec: &ParameterSpec) -> Result<SysExMessage> {
        block.validate()?;
        let address = block.with_offset(spec.address_offset)?;
        let data = convert::encode_data(spec, value)?;

        trace!(
            "Encode {} = {} -> [{}] {:02X?}",
            spec.name,
            value,
            address,
            data.as_slice()
        );
        Ok(SysExMessage::new(self.device_id, Command::Dt1, address, data))
    }

    /// DT1 with explicit data bytes.
    pub fn encode_raw(&self, address: Address, data: &[u8]) -> Result<SysExMessage> {
        address.validate()?;
        if let Some((i, byte)) = data.iter().enumerate().find(|(_, b)| **b > 0x7F) {
            return Err(Error::ValueOutOfRange {
                name: format!("data[{i}]"),
                value: *byte as i64,
                min: 0,
                max: 0x7F,
            });
        }
        Ok(SysExMessage::new(
            self.device_id,
            Command::Dt1,
            address,
            SmallVec::from_slice(data),
        ))
    }

    /// RQ1 asking for `size` bytes starting at `address`.
    pub fn request(&self, address: Address, size: u32) -> Result<SysExMessage> {
        address.validate()?;
        if size > MAX_REQUEST_SIZE {
            return Err(Error::ValueOutOfRange {
                name: "size".into(),
                value: size as i64,
                min: 0,
                max: MAX_REQUEST_SIZE as i64,
            });
        }
        let data: Payload = SmallVec::from_buf([
            ((size >> 21) & 0x7F) as u8,
            ((size >> 14) & 0x7F) as u8,
            ((size >> 7) & 0x7F) as u8,
            (size & 0x7F) as u8,
        ]);

        trace!("Request {} bytes at [{}]", size, address);
        Ok(SysExMessage::new(self.device_id, Command::Rq1, address, data))
    }

    /// RQ1 dumping the whole `(area, tone)` block.
    pub fn request_block(&self, area: AreaTag, tone: ToneTag) -> Result<SysExMessage> {
        let address = block_address(area, tone)?;
        let size = block_size(area, tone).ok_or_else(|| Error::UnknownSection {
            area: area.to_string(),
            tone: tone.to_string(),
        })?;
        self.request(address, size)
    }
}

/// Start address of the `(area, tone)` block.
pub fn block_address(area: AreaTag, tone: ToneTag) -> Result<Address> {
    tags::block_address(area, tone)
}

/// Size in bytes of the `(area, tone)` block.
pub fn block_size(area: AreaTag, tone: ToneTag) -> Option<u32> {
    section_for(area, tone).map(|section| section.block_size())
}

/// Frame one DT1 with the default device id.
///
/// `param` is used as given; `spec.address_offset` is not added.
pub fn encode(
    area: u8,
    section: u8,
    group: u8,
    param: u8,
    value: i64,
    spec: &ParameterSpec,
) -> Result<Vec<u8>> {
    let address = Address::compose(area, section, group, param);
    address.validate()?;
    let data = convert::encode_data(spec, value)?;
    Ok(SysExMessage::new(DEFAULT_DEVICE_ID, Command::Dt1, address, data).to_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::{DIGITAL_SYNTH_1, DRUM_KIT, SYSTEM, TEMPORARY_TONE};
    use crate::params::{digital, drum, ext, system};

    fn find(specs: Vec<ParameterSpec>, name: &str) -> ParameterSpec {
        specs
            .into_iter()
            .find(|s| s.name == name)
            .unwrap_or_else(|| panic!("{name} missing"))
    }

    #[test]
    fn test_free_encode_golden_frame() {
        let cutoff = find(digital::partial(), "FILTER_CUTOFF");
        let bytes = encode(0x19, 0x01, 0x20, 0x0C, 64, &cutoff).unwrap();
        assert_eq!(
            bytes,
            vec![
                0xF0, 0x41, 0x10, 0x00, 0x00, 0x00, 0x0E, 0x12, 0x19, 0x01, 0x20, 0x0C, 0x40, 0x7A,
                0xF7
            ]
        );
    }

    #[test]
    fn test_free_encode_rejects_wide_address() {
        let cutoff = find(digital::partial(), "FILTER_CUTOFF");
        assert!(matches!(
            encode(0x19, 0x80, 0x20, 0x0C, 64, &cutoff),
            Err(Error::AddressOutOfRange { index: 1, value: 0x80 })
        ));
        assert!(matches!(
            encode(0x19, 0x01, 0x20, 0x0C, 128, &cutoff),
            Err(Error::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn test_bipolar_encode() {
        let encoder = Encoder::default();
        let depth = find(digital::partial(), "FILTER_ENV_DEPTH");
        let block = Address::new(TEMPORARY_TONE, DIGITAL_SYNTH_1, 0x20, 0x00);

        let low = encoder.encode(block, -63, &depth).unwrap();
        assert_eq!(low.address, Address::new(0x19, 0x01, 0x20, 0x14));
        assert_eq!(low.data.as_slice(), &[1]);

        let high = encoder.encode(block, 63, &depth).unwrap();
        assert_eq!(high.data.as_slice(), &[127]);
    }

    #[test]
    fn test_master_tune_encode() {
        let tune = find(system::common(), "MASTER_TUNE");
        let msg = Encoder::default()
            .encode(Address::new(SYSTEM, 0x00, 0x00, 0x00), 500, &tune)
            .unwrap();
        assert_eq!(msg.data.as_slice(), &[0x00, 0x05, 0x0F, 0x04]);
        assert_eq!(msg.checksum, 0x66);
    }

    #[test]
    fn test_offset_carries_into_group() {
        let depth = find(drum::partial(), "PITCH_ENV_DEPTH");
        assert_eq!(depth.address_offset, ext(0x01, 0x15));
        let msg = Encoder::default()
            .encode(Address::new(TEMPORARY_TONE, DRUM_KIT, 0x2E, 0x00), 0, &depth)
            .unwrap();
        assert_eq!(msg.address.to_bytes(), [0x19, 0x70, 0x2F, 0x15]);
    }

    #[test]
    fn test_encode_raw_and_device_id() {
        let encoder = Encoder::new(0x11);
        let msg = encoder
            .encode_raw(Address::new(0x19, 0x42, 0x00, 0x21), &[0x40])
            .unwrap();
        assert_eq!(msg.to_bytes()[2], 0x11);
        assert!(encoder
            .encode_raw(Address::new(0x19, 0x42, 0x00, 0x21), &[0x80])
            .is_err());
    }

    #[test]
    fn test_request_size_bytes() {
        let msg = Encoder::default()
            .request(Address::new(0x19, 0x70, 0x2E, 0x00), ext(0x01, 0x43) as u32)
            .unwrap();
        assert_eq!(msg.command, Command::Rq1);
        assert_eq!(msg.data.as_slice(), &[0x00, 0x00, 0x01, 0x43]);
        assert!(Encoder::default()
            .request(Address::new(0x19, 0x70, 0x2E, 0x00), MAX_REQUEST_SIZE + 1)
            .is_err());
    }

    #[test]
    fn test_request_block() {
        let msg = Encoder::default()
            .request_block(AreaTag::Analog, ToneTag::Common)
            .unwrap();
        assert_eq!(msg.address, Address::new(0x19, 0x42, 0x00, 0x00));
        assert_eq!(msg.data.as_slice(), &[0x00, 0x00, 0x00, 0x40]);

        assert!(matches!(
            Encoder::default().request_block(AreaTag::Analog, ToneTag::Modify),
            Err(Error::UnknownSection { .. })
        ));
    }
}
