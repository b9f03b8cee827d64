//! Parameter descriptors.
//!
//! A [`ParameterSpec`] says where a parameter sits inside its block, which raw
//! values travel on the wire, what range a user sees, and which rule maps
//! between the two.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Rule used to map display values onto raw MIDI values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConversionKind {
    /// `raw == display`
    #[default]
    Identity,

    /// `raw = display + k`
    BipolarOffset(i64),

    /// Linear re-map of `raw_min..=raw_max` onto `display_min..=display_max`,
    /// rounded half away from zero.
    LinearRemap,

    /// `raw16 = display + 32768`, sent as four big-endian nibbles.
    NibbledSigned16,
}

/// Bias applied by [`ConversionKind::NibbledSigned16`].
pub const NIBBLE_BIAS: i64 = 32768;

/// How many data bytes a parameter occupies on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DataWidth {
    /// One 7-bit byte.
    #[default]
    Byte,
    /// Four bytes, each holding one nibble of a 16-bit value.
    Nibbles4,
}

impl DataWidth {
    #[inline]
    pub const fn len(self) -> usize {
        match self {
            DataWidth::Byte => 1,
            DataWidth::Nibbles4 => 4,
        }
    }
}

/// Immutable description of one named parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    pub name: Cow<'static, str>,
    /// Linear offset inside the block. Offsets above 0x7F carry into the group byte.
    pub address_offset: u16,
    pub raw_min: i64,
    pub raw_max: i64,
    pub display_min: i64,
    pub display_max: i64,
    pub conversion: ConversionKind,
    pub width: DataWidth,
    /// `(display, raw)` pairs for switches that skip reserved raw values.
    pub value_map: Option<&'static [(i64, i64)]>,
}

impl ParameterSpec {
    /// Plain 7-bit parameter with `raw == display`.
    pub fn new(name: impl Into<Cow<'static, str>>, offset: u16, min: i64, max: i64) -> Self {
        Self {
            name: name.into(),
            address_offset: offset,
            raw_min: min,
            raw_max: max,
            display_min: min,
            display_max: max,
            conversion: ConversionKind::Identity,
            width: DataWidth::Byte,
            value_map: None,
        }
    }

    /// Bipolar parameter: display range is the raw range shifted down by `k`.
    pub fn bipolar(
        name: impl Into<Cow<'static, str>>,
        offset: u16,
        raw_min: i64,
        raw_max: i64,
        k: i64,
    ) -> Self {
        Self {
            display_min: raw_min - k,
            display_max: raw_max - k,
            conversion: ConversionKind::BipolarOffset(k),
            ..Self::new(name, offset, raw_min, raw_max)
        }
    }

    /// Re-mapped parameter, e.g. keyfollow 54..=74 shown as -100..=+100.
    pub fn remap(
        name: impl Into<Cow<'static, str>>,
        offset: u16,
        raw: (i64, i64),
        display: (i64, i64),
    ) -> Self {
        Self {
            display_min: display.0,
            display_max: display.1,
            conversion: ConversionKind::LinearRemap,
            ..Self::new(name, offset, raw.0, raw.1)
        }
    }

    /// Effect parameter: -20000..=+20000 sent as four nibbles of `value + 32768`.
    pub fn nibbled_signed(name: impl Into<Cow<'static, str>>, offset: u16) -> Self {
        Self {
            raw_min: NIBBLE_BIAS - 20000,
            raw_max: NIBBLE_BIAS + 20000,
            display_min: -20000,
            display_max: 20000,
            conversion: ConversionKind::NibbledSigned16,
            width: DataWidth::Nibbles4,
            ..Self::new(name, offset, 0, 0)
        }
    }

    /// Switch whose display indices skip reserved raw values.
    pub fn switch_map(
        name: impl Into<Cow<'static, str>>,
        offset: u16,
        map: &'static [(i64, i64)],
    ) -> Self {
        let (display_min, display_max) = min_max(map.iter().map(|(d, _)| *d));
        let (raw_min, raw_max) = min_max(map.iter().map(|(_, r)| *r));
        Self {
            display_min,
            display_max,
            value_map: Some(map),
            ..Self::new(name, offset, raw_min, raw_max)
        }
    }

    /// Send this parameter as four nibbles instead of one byte.
    pub fn nibbled(mut self) -> Self {
        self.width = DataWidth::Nibbles4;
        self
    }

    #[inline]
    pub fn data_len(&self) -> usize {
        self.width.len()
    }

    #[inline]
    pub fn contains_raw(&self, raw: i64) -> bool {
        (self.raw_min..=self.raw_max).contains(&raw)
    }

    #[inline]
    pub fn contains_display(&self, display: i64) -> bool {
        (self.display_min..=self.display_max).contains(&display)
    }

    /// Check the range invariants.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| {
            Err(Error::InvalidConfig(format!("{}: {}", self.name, reason)))
        };

        if self.raw_min > self.raw_max {
            return invalid("raw_min > raw_max");
        }
        if self.display_min > self.display_max {
            return invalid("display_min > display_max");
        }
        let raw_limit = match self.width {
            DataWidth::Byte => 0x7F,
            DataWidth::Nibbles4 => 0xFFFF,
        };
        if self.raw_min < 0 || self.raw_max > raw_limit {
            return invalid("raw range does not fit the data width");
        }
        match self.conversion {
            ConversionKind::NibbledSigned16 if self.width != DataWidth::Nibbles4 => {
                return invalid("NibbledSigned16 must use four nibbles");
            }
            ConversionKind::LinearRemap if self.raw_min == self.raw_max => {
                return invalid("LinearRemap needs a non-empty raw range");
            }
            _ => {}
        }
        if let Some(map) = self.value_map {
            if map.is_empty() {
                return invalid("empty value map");
            }
        }
        Ok(())
    }
}

fn min_max(values: impl Iterator<Item = i64>) -> (i64, i64) {
    values.fold((i64::MAX, i64::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)))
}
