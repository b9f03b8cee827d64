//! Roland SysEx framing.
//!
//! ```text
//! F0 41 <device> 00 00 00 0E <command> <a0 a1 a2 a3> <data...> <checksum> F7
//! ```

use crate::address::Address;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub const SYSEX_START: u8 = 0xF0;
pub const SYSEX_END: u8 = 0xF7;
pub const ROLAND_ID: u8 = 0x41;
pub const DEFAULT_DEVICE_ID: u8 = 0x10;
pub const BROADCAST_DEVICE_ID: u8 = 0x7F;
pub const MODEL_ID: [u8; 4] = [0x00, 0x00, 0x00, 0x0E];

/// Bytes before the address: start, maker, device, model (4), command.
pub const HEADER_LEN: usize = 8;
/// Index of the first data byte.
pub const DATA_START: usize = HEADER_LEN + 4;
/// Shortest byte sequence accepted for framing checks. The address itself
/// needs [`DATA_START`] + 1 bytes and is checked separately.
pub const MIN_MESSAGE_LEN: usize = 11;

/// Data payload. One byte for plain parameters, four for nibbled ones.
pub type Payload = SmallVec<[u8; 4]>;

/// Roland exclusive command byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Data set 1
    Dt1,
    /// Data request 1
    Rq1,
}

impl Command {
    pub const fn byte(self) -> u8 {
        match self {
            Command::Dt1 => 0x12,
            Command::Rq1 => 0x11,
        }
    }

    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x12 => Some(Command::Dt1),
            0x11 => Some(Command::Rq1),
            _ => None,
        }
    }
}

/// Roland checksum over address and data: `(128 - (sum % 128)) & 0x7F`.
pub fn checksum(address: &[u8], data: &[u8]) -> u8 {
    let sum: u32 = address.iter().chain(data).map(|b| *b as u32).sum();
    ((128 - (sum % 128)) & 0x7F) as u8
}

/// A framed JD-Xi exclusive message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SysExMessage {
    pub device_id: u8,
    pub command: Command,
    pub address: Address,
    pub data: Payload,
    pub checksum: u8,
}

impl SysExMessage {
    /// Build a message and compute its checksum.
    pub fn new(device_id: u8, command: Command, address: Address, data: Payload) -> Self {
        let checksum = checksum(&address.to_bytes(), &data);
        Self {
            device_id,
            command,
            address,
            data,
            checksum,
        }
    }

    /// Total frame length in bytes.
    pub fn frame_len(&self) -> usize {
        DATA_START + self.data.len() + 2
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.frame_len());
        bytes.extend_from_slice(&[SYSEX_START, ROLAND_ID, self.device_id]);
        bytes.extend_from_slice(&MODEL_ID);
        bytes.push(self.command.byte());
        bytes.extend_from_slice(&self.address.to_bytes());
        bytes.extend_from_slice(&self.data);
        bytes.push(self.checksum);
        bytes.push(SYSEX_END);
        bytes
    }
}

impl From<SysExMessage> for Vec<u8> {
    fn from(message: SysExMessage) -> Self {
        message.to_bytes()
    }
}
