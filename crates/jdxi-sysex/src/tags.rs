//! Temporary-area and tone classification of incoming addresses.
//!
//! The first two address bytes pick the [`AreaTag`]; the group byte (message
//! byte 10) picks the [`ToneTag`] inside that area. Anything not in the tables
//! is `Unknown`.

use crate::address::{
    self, Address, PartialRef, ANALOG_SYNTH, COMMON, DIGITAL_MODIFY, DIGITAL_PARTIAL_1,
    DIGITAL_PARTIAL_COUNT, DIGITAL_SYNTH_1, DIGITAL_SYNTH_2, DRUM_KIT, PROGRAM_DELAY,
    PROGRAM_EFFECT_1, PROGRAM_EFFECT_2, PROGRAM_REVERB, PROGRAM_VOCAL_EFFECT, SYSTEM,
    SYSTEM_CONTROLLER, TEMPORARY_PROGRAM, TEMPORARY_TONE,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Memory area an address belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AreaTag {
    Program,
    System,
    Digital1,
    Digital2,
    Analog,
    DrumKit,
    #[default]
    Unknown,
}

impl AreaTag {
    const TABLE: [((u8, u8), AreaTag); 6] = [
        ((TEMPORARY_PROGRAM, 0x00), AreaTag::Program),
        ((SYSTEM, 0x00), AreaTag::System),
        ((TEMPORARY_TONE, DIGITAL_SYNTH_1), AreaTag::Digital1),
        ((TEMPORARY_TONE, DIGITAL_SYNTH_2), AreaTag::Digital2),
        ((TEMPORARY_TONE, ANALOG_SYNTH), AreaTag::Analog),
        ((TEMPORARY_TONE, DRUM_KIT), AreaTag::DrumKit),
    ];

    /// Classify `(address[0], address[1])`.
    pub fn classify(area: u8, section: u8) -> Self {
        Self::TABLE
            .iter()
            .find(|(key, _)| *key == (area, section))
            .map(|(_, tag)| *tag)
            .unwrap_or(AreaTag::Unknown)
    }

    /// `(area, section)` address bytes of this area.
    pub fn address_prefix(self) -> Option<(u8, u8)> {
        Self::TABLE
            .iter()
            .find(|(_, tag)| *tag == self)
            .map(|(key, _)| *key)
    }

    pub fn is_known(self) -> bool {
        self != AreaTag::Unknown
    }
}

impl fmt::Display for AreaTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AreaTag::Program => "Program",
            AreaTag::System => "System",
            AreaTag::Digital1 => "Digital1",
            AreaTag::Digital2 => "Digital2",
            AreaTag::Analog => "Analog",
            AreaTag::DrumKit => "DrumKit",
            AreaTag::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Block inside an area an address belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToneTag {
    Common,
    /// Digital partial, 1-based.
    Partial(u8),
    Modify,
    /// Drum pad by MIDI note.
    DrumPad(u8),
    VocalEffect,
    Effect1,
    Effect2,
    Delay,
    Reverb,
    Controller,
    #[default]
    Unknown,
}

impl ToneTag {
    /// Classify the group byte (message byte 10) inside `area`.
    pub fn classify(area: AreaTag, group: u8) -> Self {
        match (area, group) {
            (AreaTag::Unknown, _) => ToneTag::Unknown,
            (_, COMMON) => ToneTag::Common,
            (AreaTag::Digital1 | AreaTag::Digital2, DIGITAL_MODIFY) => ToneTag::Modify,
            (AreaTag::Digital1 | AreaTag::Digital2, g)
                if (DIGITAL_PARTIAL_1..DIGITAL_PARTIAL_1 + DIGITAL_PARTIAL_COUNT).contains(&g) =>
            {
                ToneTag::Partial(g - DIGITAL_PARTIAL_1 + 1)
            }
            (AreaTag::DrumKit, g) => address::drum_pad_note(g)
                .map(ToneTag::DrumPad)
                .unwrap_or(ToneTag::Unknown),
            (AreaTag::Program, PROGRAM_VOCAL_EFFECT) => ToneTag::VocalEffect,
            (AreaTag::Program, PROGRAM_EFFECT_1) => ToneTag::Effect1,
            (AreaTag::Program, PROGRAM_EFFECT_2) => ToneTag::Effect2,
            (AreaTag::Program, PROGRAM_DELAY) => ToneTag::Delay,
            (AreaTag::Program, PROGRAM_REVERB) => ToneTag::Reverb,
            (AreaTag::System, SYSTEM_CONTROLLER) => ToneTag::Controller,
            _ => ToneTag::Unknown,
        }
    }

    /// Group byte of this tone block.
    pub fn group(self) -> Option<u8> {
        match self {
            ToneTag::Common => Some(COMMON),
            ToneTag::Partial(n) => PartialRef::Digital(n).group().ok(),
            ToneTag::Modify => Some(DIGITAL_MODIFY),
            ToneTag::DrumPad(note) => PartialRef::DrumPad(note).group().ok(),
            ToneTag::VocalEffect => Some(PROGRAM_VOCAL_EFFECT),
            ToneTag::Effect1 => Some(PROGRAM_EFFECT_1),
            ToneTag::Effect2 => Some(PROGRAM_EFFECT_2),
            ToneTag::Delay => Some(PROGRAM_DELAY),
            ToneTag::Reverb => Some(PROGRAM_REVERB),
            ToneTag::Controller => Some(SYSTEM_CONTROLLER),
            ToneTag::Unknown => None,
        }
    }

    pub fn is_known(self) -> bool {
        self != ToneTag::Unknown
    }
}

impl fmt::Display for ToneTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToneTag::Common => f.write_str("Common"),
            ToneTag::Partial(n) => write!(f, "Partial{n}"),
            ToneTag::Modify => f.write_str("Modify"),
            ToneTag::DrumPad(note) => write!(f, "DrumPad{note}"),
            ToneTag::VocalEffect => f.write_str("VocalEffect"),
            ToneTag::Effect1 => f.write_str("Effect1"),
            ToneTag::Effect2 => f.write_str("Effect2"),
            ToneTag::Delay => f.write_str("Delay"),
            ToneTag::Reverb => f.write_str("Reverb"),
            ToneTag::Controller => f.write_str("Controller"),
            ToneTag::Unknown => f.write_str("Unknown"),
        }
    }
}

/// Start address of the `(area, tone)` block.
pub fn block_address(area: AreaTag, tone: ToneTag) -> Result<Address> {
    let unknown = || Error::UnknownSection {
        area: area.to_string(),
        tone: tone.to_string(),
    };
    let (area_byte, section_byte) = area.address_prefix().ok_or_else(unknown)?;
    let group = tone.group().ok_or_else(unknown)?;

    // Reject combinations the classifier would not map back, e.g. Analog + Partial1
    if ToneTag::classify(area, group) != tone {
        return Err(unknown());
    }
    Ok(Address::new(area_byte, section_byte, group, 0x00))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_area() {
        assert_eq!(AreaTag::classify(0x18, 0x00), AreaTag::Program);
        assert_eq!(AreaTag::classify(0x02, 0x00), AreaTag::System);
        assert_eq!(AreaTag::classify(0x19, 0x01), AreaTag::Digital1);
        assert_eq!(AreaTag::classify(0x19, 0x21), AreaTag::Digital2);
        assert_eq!(AreaTag::classify(0x19, 0x42), AreaTag::Analog);
        assert_eq!(AreaTag::classify(0x19, 0x70), AreaTag::DrumKit);
        assert_eq!(AreaTag::classify(0x19, 0x02), AreaTag::Unknown);
        assert_eq!(AreaTag::classify(0x7F, 0x7F), AreaTag::Unknown);
    }

    #[test]
    fn test_classify_tone() {
        assert_eq!(ToneTag::classify(AreaTag::Digital1, 0x00), ToneTag::Common);
        assert_eq!(ToneTag::classify(AreaTag::Digital1, 0x20), ToneTag::Partial(1));
        assert_eq!(ToneTag::classify(AreaTag::Digital2, 0x22), ToneTag::Partial(3));
        assert_eq!(ToneTag::classify(AreaTag::Digital2, 0x23), ToneTag::Unknown);
        assert_eq!(ToneTag::classify(AreaTag::Digital1, 0x50), ToneTag::Modify);
        assert_eq!(ToneTag::classify(AreaTag::DrumKit, 0x2E), ToneTag::DrumPad(36));
        assert_eq!(ToneTag::classify(AreaTag::DrumKit, 0x30), ToneTag::DrumPad(37));
        assert_eq!(ToneTag::classify(AreaTag::DrumKit, 0x2F), ToneTag::Unknown);
        assert_eq!(ToneTag::classify(AreaTag::Program, 0x02), ToneTag::Effect1);
        assert_eq!(ToneTag::classify(AreaTag::Program, 0x08), ToneTag::Reverb);
        assert_eq!(ToneTag::classify(AreaTag::System, 0x03), ToneTag::Controller);
        assert_eq!(ToneTag::classify(AreaTag::Analog, 0x20), ToneTag::Unknown);
        assert_eq!(ToneTag::classify(AreaTag::Unknown, 0x00), ToneTag::Unknown);
    }

    #[test]
    fn test_block_address() {
        assert_eq!(
            block_address(AreaTag::Digital2, ToneTag::Partial(2)).unwrap(),
            Address::new(0x19, 0x21, 0x21, 0x00)
        );
        assert_eq!(
            block_address(AreaTag::DrumKit, ToneTag::DrumPad(72)).unwrap(),
            Address::new(0x19, 0x70, 0x76, 0x00)
        );
        assert_eq!(
            block_address(AreaTag::Program, ToneTag::Delay).unwrap(),
            Address::new(0x18, 0x00, 0x06, 0x00)
        );
        assert!(matches!(
            block_address(AreaTag::Analog, ToneTag::Partial(1)),
            Err(Error::UnknownSection { .. })
        ));
        assert!(block_address(AreaTag::DrumKit, ToneTag::DrumPad(80)).is_err());
        assert!(block_address(AreaTag::Unknown, ToneTag::Common).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(AreaTag::DrumKit.to_string(), "DrumKit");
        assert_eq!(ToneTag::Partial(2).to_string(), "Partial2");
        assert_eq!(ToneTag::DrumPad(36).to_string(), "DrumPad36");
        assert_eq!(ToneTag::Unknown.to_string(), "Unknown");
    }
}
