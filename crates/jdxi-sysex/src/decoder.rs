//! Incoming SysEx classification and parameter extraction.
//!
//! Decoding never fails. Bad framing, unknown areas and short buffers all
//! produce a [`ParsedResult`] with `Unknown` tags and fewer parameters, and the
//! reason is logged at `debug`.

use crate::address::Address;
use crate::convert;
use crate::message::{
    checksum, Command, DATA_START, MIN_MESSAGE_LEN, MODEL_ID, ROLAND_ID, SYSEX_END, SYSEX_START,
};
use crate::registry::{section_for, ParameterRegistry, RegistrySet};
use crate::spec::{DataWidth, ParameterSpec};
use crate::tags::{AreaTag, ToneTag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Tone names are the first twelve data bytes.
pub const TONE_NAME_LEN: usize = 12;
const NAME_MESSAGE_LEN: usize = DATA_START + TONE_NAME_LEN;

/// What one incoming message says.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedResult {
    pub temporary_area: AreaTag,
    pub synth_tone: ToneTag,
    pub tone_name: Option<String>,
    /// Raw values keyed by parameter name
    pub parameters: BTreeMap<String, i64>,
    pub address: Option<Address>,
    pub command: Option<Command>,
    pub checksum_valid: bool,
}

impl ParsedResult {
    /// Result for a message that could not be classified.
    pub fn unknown(address: Option<Address>) -> Self {
        Self {
            address,
            ..Self::default()
        }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.parameters.get(name).copied()
    }

    pub fn is_unknown(&self) -> bool {
        !self.temporary_area.is_known()
    }
}

/// Stateless decoder over a shared registry set.
#[derive(Debug, Clone)]
pub struct Decoder {
    registries: Arc<RegistrySet>,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(Arc::new(RegistrySet::new()))
    }
}

impl Decoder {
    pub fn new(registries: Arc<RegistrySet>) -> Self {
        Self { registries }
    }

    pub fn registries(&self) -> &Arc<RegistrySet> {
        &self.registries
    }

    pub fn decode(&self, bytes: &[u8]) -> ParsedResult {
        decode(&self.registries, bytes)
    }
}

/// Decode one message against `registries`.
pub fn decode(registries: &RegistrySet, bytes: &[u8]) -> ParsedResult {
    let frame = match Frame::parse(bytes) {
        Ok(frame) => frame,
        Err(reason) => {
            debug!("Unrecognised message ({} bytes): {}", bytes.len(), reason);
            return ParsedResult::unknown(loose_address(bytes));
        }
    };

    let mut result = ParsedResult {
        address: Some(frame.address),
        command: frame.command,
        checksum_valid: frame.checksum_valid(),
        ..ParsedResult::default()
    };
    if !result.checksum_valid {
        warn!("Checksum mismatch at [{}]", frame.address);
    }

    let area = AreaTag::classify(frame.address.area, frame.address.section);
    result.temporary_area = area;
    if !area.is_known() {
        debug!("Unknown area at [{}]", frame.address);
        return result;
    }

    let (tone, start) = locate(area, frame.address);
    result.synth_tone = tone;
    if !tone.is_known() {
        debug!("Unknown {} block at [{}]", area, frame.address);
        return result;
    }

    let named = section_for(area, tone).is_some_and(|section| section.has_name());
    if named && start == 0 && bytes.len() >= NAME_MESSAGE_LEN {
        result.tone_name = Some(tone_name(&bytes[DATA_START..NAME_MESSAGE_LEN]));
    }

    if frame.command != Some(Command::Dt1) {
        debug!("No data to extract from {:?} at [{}]", frame.command, frame.address);
        return result;
    }

    match registries.registry_for(area, tone) {
        Some(registry) => {
            extract(registry, start, frame.data, &mut result.parameters);
            trace!(
                "Decoded {} {} from [{}]: {} parameters",
                area,
                tone,
                frame.address,
                result.parameters.len()
            );
        }
        None => debug!("No parameter table for {} {}", area, tone),
    }
    result
}

/// Borrowed view of a well-formed message.
struct Frame<'a> {
    command: Option<Command>,
    address: Address,
    data: &'a [u8],
    checksum: Option<u8>,
}

impl<'a> Frame<'a> {
    fn parse(bytes: &'a [u8]) -> Result<Self, &'static str> {
        if bytes.len() < MIN_MESSAGE_LEN {
            return Err("too short");
        }
        if bytes.first() != Some(&SYSEX_START) || bytes.last() != Some(&SYSEX_END) {
            return Err("not a SysEx frame");
        }
        if bytes[1] != ROLAND_ID || bytes[3..7] != MODEL_ID {
            return Err("not a JD-Xi message");
        }

        // Without F7
        let body = &bytes[..bytes.len() - 1];
        let address = body
            .get(8..)
            .and_then(Address::from_slice)
            .ok_or("truncated address")?;

        let (data, checksum) = match body.get(DATA_START..) {
            Some([data @ .., checksum]) => (data, Some(*checksum)),
            _ => (&[][..], None),
        };

        Ok(Self {
            command: Command::from_byte(bytes[7]),
            address,
            data,
            checksum,
        })
    }

    fn checksum_valid(&self) -> bool {
        self.checksum == Some(checksum(&self.address.to_bytes(), self.data))
    }
}

/// Address bytes of a message that failed framing, if they look like one.
fn loose_address(bytes: &[u8]) -> Option<Address> {
    bytes
        .get(8..)
        .and_then(Address::from_slice)
        .filter(|address| address.validate().is_ok())
}

/// Tone of the block containing `address`, and the linear offset the data starts at.
///
/// A group byte that only exists as the 7-bit carry of a larger block
/// (drum partial TVF/TVA, effect parameters 28+) resolves to the block it
/// belongs to, with the start offset moved past `0x7F`.
fn locate(area: AreaTag, address: Address) -> (ToneTag, u16) {
    let tone = ToneTag::classify(area, address.group);
    if tone.is_known() || address.group == 0 {
        return (tone, address.param as u16);
    }

    let base = ToneTag::classify(area, address.group - 1);
    let spans_carry = section_for(area, base).is_some_and(|section| section.block_size() > 0x80);
    if base.is_known() && spans_carry {
        (base, 0x80 + address.param as u16)
    } else {
        (ToneTag::Unknown, address.param as u16)
    }
}

/// Pull every parameter whose first byte is inside `data`.
///
/// Nibbled parameters that run past the end read the missing nibbles as 0.
/// Parameters with malformed nibbles are skipped.
fn extract(
    registry: &ParameterRegistry,
    start: u16,
    data: &[u8],
    parameters: &mut BTreeMap<String, i64>,
) {
    for spec in registry.iter() {
        let Some(index) = spec.address_offset.checked_sub(start).map(usize::from) else {
            continue;
        };
        if index >= data.len() {
            break;
        }

        match read_raw(spec, data, index) {
            Ok(raw) => {
                parameters.insert(spec.name.to_string(), raw);
            }
            Err(e) => trace!("Skipping {}: {}", spec.name, e),
        }
    }
}

fn read_raw(spec: &ParameterSpec, data: &[u8], index: usize) -> crate::Result<i64> {
    let byte_at = |i: usize| data.get(i).copied().unwrap_or(0);
    match spec.width {
        DataWidth::Byte => Ok(byte_at(index) as i64),
        DataWidth::Nibbles4 => {
            let nibbles: [u8; 4] = std::array::from_fn(|i| byte_at(index + i));
            convert::decode_data(spec, &nibbles)
        }
    }
}

/// Printable ASCII kept, anything else shown as `?`, trailing padding dropped.
fn tone_name(bytes: &[u8]) -> String {
    let end = bytes
        .iter()
        .rposition(|&b| !matches!(b, b' ' | 0x00 | b'\r'))
        .map_or(0, |i| i + 1);
    bytes[..end]
        .iter()
        .map(|&b| if (32..=127).contains(&b) { b as char } else { '?' })
        .collect()
}
