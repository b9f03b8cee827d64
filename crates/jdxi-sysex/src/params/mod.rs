//! JD-Xi parameter tables, one function per memory block.
//!
//! Offsets are linear within their block. Values beyond `0x7F` are written with
//! [`ext`] so the table reads like the hardware's two-byte address column.

pub mod analog;
pub mod digital;
pub mod drum;
pub mod effects;
pub mod program;
pub mod system;

use crate::spec::ParameterSpec;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Every parameter block with its own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Section {
    DigitalCommon,
    DigitalPartial,
    DigitalModify,
    Analog,
    DrumCommon,
    DrumPartial,
    ProgramCommon,
    VocalEffect,
    Effect1,
    Effect2,
    Delay,
    Reverb,
    SystemCommon,
    SystemController,
    /// Effect 1, Effect 2, Delay and Reverb merged for name lookups.
    Effects,
}

impl Section {
    pub const ALL: [Section; 14] = [
        Section::DigitalCommon,
        Section::DigitalPartial,
        Section::DigitalModify,
        Section::Analog,
        Section::DrumCommon,
        Section::DrumPartial,
        Section::ProgramCommon,
        Section::VocalEffect,
        Section::Effect1,
        Section::Effect2,
        Section::Delay,
        Section::Reverb,
        Section::SystemCommon,
        Section::SystemController,
    ];

    /// Parameter table for this section. `Effects` is assembled by the registry set.
    pub fn specs(self) -> Vec<ParameterSpec> {
        match self {
            Section::DigitalCommon => digital::common(),
            Section::DigitalPartial => digital::partial(),
            Section::DigitalModify => digital::modify(),
            Section::Analog => analog::tone(),
            Section::DrumCommon => drum::common(),
            Section::DrumPartial => drum::partial(),
            Section::ProgramCommon => program::common(),
            Section::VocalEffect => program::vocal_effect(),
            Section::Effect1 => effects::effect1(),
            Section::Effect2 => effects::effect2(),
            Section::Delay => effects::delay(),
            Section::Reverb => effects::reverb(),
            Section::SystemCommon => system::common(),
            Section::SystemController => system::controller(),
            Section::Effects => Vec::new(),
        }
    }

    /// Whether the block starts with twelve name characters.
    pub fn has_name(self) -> bool {
        matches!(
            self,
            Section::DigitalCommon
                | Section::Analog
                | Section::DrumCommon
                | Section::DrumPartial
                | Section::ProgramCommon
        )
    }

    /// Size of the block in bytes, as requested by an RQ1 dump.
    pub fn block_size(self) -> u32 {
        match self {
            Section::DigitalCommon => 0x40,
            Section::DigitalPartial => 0x3D,
            Section::DigitalModify => 0x25,
            Section::Analog => 0x40,
            Section::DrumCommon => 0x12,
            Section::DrumPartial => ext(0x01, 0x43) as u32,
            Section::ProgramCommon => 0x1F,
            Section::VocalEffect => 0x18,
            Section::Effect1 | Section::Effect2 => ext(0x01, 0x11) as u32,
            Section::Delay => 0x64,
            Section::Reverb => 0x63,
            Section::SystemCommon => 0x2B,
            Section::SystemController => 0x11,
            Section::Effects => 0,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Two-byte 7-bit address (`hi lo`) as a linear offset.
#[inline]
pub const fn ext(hi: u8, lo: u8) -> u16 {
    hi as u16 * 0x80 + lo as u16
}

// Shorthands for the shapes that recur across every table

pub(crate) fn level(name: impl Into<Cow<'static, str>>, offset: u16) -> ParameterSpec {
    ParameterSpec::new(name, offset, 0, 127)
}

pub(crate) fn switch(name: impl Into<Cow<'static, str>>, offset: u16) -> ParameterSpec {
    ParameterSpec::new(name, offset, 0, 1)
}

/// 1..=127 shown as -63..=+63.
pub(crate) fn bipolar63(name: impl Into<Cow<'static, str>>, offset: u16) -> ParameterSpec {
    ParameterSpec::bipolar(name, offset, 1, 127, 64)
}

/// 0..=127 shown as L64..63R.
pub(crate) fn pan(name: impl Into<Cow<'static, str>>, offset: u16) -> ParameterSpec {
    ParameterSpec::bipolar(name, offset, 0, 127, 64)
}

/// 54..=74 shown as -100..=+100.
pub(crate) fn keyfollow(name: impl Into<Cow<'static, str>>, offset: u16) -> ParameterSpec {
    ParameterSpec::remap(name, offset, (54, 74), (-100, 100))
}

/// Twelve ASCII name characters at offsets 0x00..=0x0B.
pub(crate) fn name_chars(prefix: &str) -> Vec<ParameterSpec> {
    (1..=12u16)
        .map(|i| ParameterSpec::new(format!("{prefix}_{i}"), i - 1, 32, 127))
        .collect()
}

/// Ring Switch: 0 = OFF, 1 = reserved, 2 = ON.
pub static RING_SWITCH_MAP: &[(i64, i64)] = &[(0, 0), (1, 2)];
