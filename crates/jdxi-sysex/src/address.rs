//! JD-Xi parameter addressing.
//!
//! Every parameter lives at a 4-byte address: memory area, section (tone slot
//! or program block), group (common/partial/effect block) and param offset.
//! Addresses are plain `Copy` values; composing a new one never mutates the old.
//!
//! ```
//! use jdxi_sysex::address::{Address, PartialRef, DIGITAL_SYNTH_1, TEMPORARY_TONE};
//!
//! let partial = PartialRef::Digital(2);
//! let addr = Address::compose_partial(TEMPORARY_TONE, DIGITAL_SYNTH_1, partial, 0x0C)?;
//! assert_eq!(addr.to_bytes(), [0x19, 0x01, 0x21, 0x0C]);
//! # Ok::<(), jdxi_sysex::Error>(())
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// Memory areas (address byte 0)
pub const SETUP: u8 = 0x01;
pub const SYSTEM: u8 = 0x02;
pub const TEMPORARY_PROGRAM: u8 = 0x18;
pub const TEMPORARY_TONE: u8 = 0x19;

// Temporary tone slots (address byte 1, area 0x19)
pub const DIGITAL_SYNTH_1: u8 = 0x01;
pub const DIGITAL_SYNTH_2: u8 = 0x21;
pub const ANALOG_SYNTH: u8 = 0x42;
pub const DRUM_KIT: u8 = 0x70;

// Groups (address byte 2)
pub const COMMON: u8 = 0x00;
pub const DIGITAL_PARTIAL_1: u8 = 0x20;
pub const DIGITAL_MODIFY: u8 = 0x50;
pub const DRUM_PAD_BASE: u8 = 0x2E;

pub const PROGRAM_VOCAL_EFFECT: u8 = 0x01;
pub const PROGRAM_EFFECT_1: u8 = 0x02;
pub const PROGRAM_EFFECT_2: u8 = 0x04;
pub const PROGRAM_DELAY: u8 = 0x06;
pub const PROGRAM_REVERB: u8 = 0x08;

pub const SYSTEM_CONTROLLER: u8 = 0x03;

/// Digital synth tones have three partials.
pub const DIGITAL_PARTIAL_COUNT: u8 = 3;

/// Lowest and highest drum pad notes (C1..C4).
pub const DRUM_NOTE_MIN: u8 = 36;
pub const DRUM_NOTE_MAX: u8 = 72;

/// Which sub-block of a tone a group byte points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartialRef {
    Common,
    /// Digital partial, 1-based.
    Digital(u8),
    /// Drum pad by MIDI note number.
    DrumPad(u8),
    Modify,
}

impl PartialRef {
    /// Group byte for this partial.
    pub fn group(self) -> Result<u8> {
        match self {
            PartialRef::Common => Ok(COMMON),
            PartialRef::Digital(partial) => digital_partial_group(partial),
            PartialRef::DrumPad(note) => drum_pad_group(note),
            PartialRef::Modify => Ok(DIGITAL_MODIFY),
        }
    }
}

/// Group byte of a digital partial (1→0x20, 2→0x21, 3→0x22).
pub fn digital_partial_group(partial: u8) -> Result<u8> {
    if (1..=DIGITAL_PARTIAL_COUNT).contains(&partial) {
        Ok(DIGITAL_PARTIAL_1 + partial - 1)
    } else {
        Err(Error::InvalidPartial(format!(
            "digital partial {partial} (expected 1-{DIGITAL_PARTIAL_COUNT})"
        )))
    }
}

/// Group byte of a drum pad: `0x2E + 2 * (note - 36)`.
pub fn drum_pad_group(note: u8) -> Result<u8> {
    if (DRUM_NOTE_MIN..=DRUM_NOTE_MAX).contains(&note) {
        Ok(DRUM_PAD_BASE + 2 * (note - DRUM_NOTE_MIN))
    } else {
        Err(Error::InvalidPartial(format!(
            "drum pad note {note} (expected {DRUM_NOTE_MIN}-{DRUM_NOTE_MAX})"
        )))
    }
}

/// Inverse of [`drum_pad_group`]. Odd groups and groups past the last pad are not pads.
pub fn drum_pad_note(group: u8) -> Option<u8> {
    if group < DRUM_PAD_BASE || (group - DRUM_PAD_BASE) % 2 != 0 {
        return None;
    }
    let note = DRUM_NOTE_MIN + (group - DRUM_PAD_BASE) / 2;
    (note <= DRUM_NOTE_MAX).then_some(note)
}

/// 4-byte JD-Xi parameter address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address {
    pub area: u8,
    pub section: u8,
    pub group: u8,
    pub param: u8,
}

impl Address {
    pub const fn new(area: u8, section: u8, group: u8, param: u8) -> Self {
        Self {
            area,
            section,
            group,
            param,
        }
    }

    /// Compose an address from its four parts. No validation; see [`Address::validate`].
    pub const fn compose(area: u8, base_section: u8, group: u8, param: u8) -> Self {
        Self::new(area, base_section, group, param)
    }

    /// Compose an address whose group byte comes from a partial or drum pad.
    pub fn compose_partial(
        area: u8,
        base_section: u8,
        partial: PartialRef,
        param: u8,
    ) -> Result<Self> {
        Ok(Self::new(area, base_section, partial.group()?, param))
    }

    /// Read an address from the first four bytes of `bytes`.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [area, section, group, param, ..] => Some(Self::new(*area, *section, *group, *param)),
            _ => None,
        }
    }

    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.area, self.section, self.group, self.param]
    }

    /// Add a linear parameter offset with 7-bit carry into the group byte.
    ///
    /// Parameters past `0x7F` inside a block (e.g. drum partial TVF/TVA, effect
    /// parameter 28+) spill into the next group byte on the wire.
    pub fn with_offset(self, offset: u16) -> Result<Self> {
        let linear = self.param as u32 + offset as u32;
        let param = (linear % 0x80) as u8;
        let group = self.group as u32 + linear / 0x80;
        if group > 0x7F {
            return Err(Error::AddressOutOfRange {
                index: 2,
                value: group,
            });
        }
        Ok(Self {
            group: group as u8,
            param,
            ..self
        })
    }

    /// Fails with `AddressOutOfRange` if any byte is not 7-bit clean.
    pub fn validate(&self) -> Result<()> {
        match self.to_bytes().iter().position(|b| *b > 0x7F) {
            Some(index) => Err(Error::AddressOutOfRange {
                index,
                value: self.to_bytes()[index] as u32,
            }),
            None => Ok(()),
        }
    }

    /// Address with the param byte cleared (start of the block).
    pub const fn block(self) -> Self {
        Self { param: 0, ..self }
    }
}

impl From<[u8; 4]> for Address {
    fn from(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X} {:02X} {:02X} {:02X}",
            self.area, self.section, self.group, self.param
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digital_partial_groups() {
        assert_eq!(digital_partial_group(1).unwrap(), 0x20);
        assert_eq!(digital_partial_group(2).unwrap(), 0x21);
        assert_eq!(digital_partial_group(3).unwrap(), 0x22);
        assert!(matches!(
            digital_partial_group(0),
            Err(Error::InvalidPartial(_))
        ));
        assert!(matches!(
            digital_partial_group(4),
            Err(Error::InvalidPartial(_))
        ));
    }

    #[test]
    fn test_drum_pad_groups() {
        assert_eq!(drum_pad_group(36).unwrap(), 0x2E);
        assert_eq!(drum_pad_group(37).unwrap(), 0x30);
        assert_eq!(drum_pad_group(72).unwrap(), 0x76);
        assert!(drum_pad_group(35).is_err());
        assert!(drum_pad_group(73).is_err());
    }

    #[test]
    fn test_drum_pad_note_inverse() {
        for note in DRUM_NOTE_MIN..=DRUM_NOTE_MAX {
            assert_eq!(drum_pad_note(drum_pad_group(note).unwrap()), Some(note));
        }
        assert_eq!(drum_pad_note(0x2F), None);
        assert_eq!(drum_pad_note(0x20), None);
        assert_eq!(drum_pad_note(0x78), None);
    }

    #[test]
    fn test_compose_partial() {
        let addr =
            Address::compose_partial(TEMPORARY_TONE, DRUM_KIT, PartialRef::DrumPad(38), 0x0E)
                .unwrap();
        assert_eq!(addr.to_bytes(), [0x19, 0x70, 0x32, 0x0E]);

        let modify =
            Address::compose_partial(TEMPORARY_TONE, DIGITAL_SYNTH_2, PartialRef::Modify, 0x01)
                .unwrap();
        assert_eq!(modify.to_bytes(), [0x19, 0x21, 0x50, 0x01]);

        assert!(
            Address::compose_partial(TEMPORARY_TONE, DIGITAL_SYNTH_1, PartialRef::Digital(5), 0)
                .is_err()
        );
    }

    #[test]
    fn test_with_offset_carries_into_group() {
        let base = Address::new(TEMPORARY_TONE, DRUM_KIT, 0x2E, 0x00);
        assert_eq!(base.with_offset(0x7F).unwrap().to_bytes(), [0x19, 0x70, 0x2E, 0x7F]);
        assert_eq!(base.with_offset(0x80).unwrap().to_bytes(), [0x19, 0x70, 0x2F, 0x00]);
        assert_eq!(base.with_offset(149).unwrap().to_bytes(), [0x19, 0x70, 0x2F, 0x15]);

        // The copy is new; the base is untouched
        assert_eq!(base.param, 0);
    }

    #[test]
    fn test_with_offset_overflow() {
        let base = Address::new(TEMPORARY_TONE, DRUM_KIT, 0x7F, 0x7F);
        assert!(matches!(
            base.with_offset(1),
            Err(Error::AddressOutOfRange { index: 2, .. })
        ));
    }

    #[test]
    fn test_validate() {
        assert!(Address::new(0x19, 0x01, 0x20, 0x0C).validate().is_ok());
        assert_eq!(
            Address::new(0x19, 0x81, 0x20, 0x0C).validate(),
            Err(Error::AddressOutOfRange {
                index: 1,
                value: 0x81
            })
        );
    }

    #[test]
    fn test_from_slice_short() {
        assert_eq!(Address::from_slice(&[0x19, 0x01, 0x20]), None);
        assert_eq!(
            Address::from_slice(&[0x19, 0x01, 0x20, 0x0C, 0x40]),
            Some(Address::new(0x19, 0x01, 0x20, 0x0C))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Address::new(0x18, 0x00, 0x02, 0x11).to_string(), "18 00 02 11");
    }
}
