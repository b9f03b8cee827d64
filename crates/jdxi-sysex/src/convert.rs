//! Display ↔ raw value conversion.
//!
//! The display domain is what a user sees (e.g. pan -63..+63, keyfollow
//! -100..+100); the raw domain is what travels in the SysEx data bytes. One
//! `match` over [`ConversionKind`] picks the rule, so a parameter can never fall
//! through to identity by accident.

use crate::error::{Error, Result};
use crate::spec::{ConversionKind, DataWidth, ParameterSpec, NIBBLE_BIAS};
use smallvec::{smallvec, SmallVec};

/// Data bytes of one parameter (1 byte, or 4 nibbles).
pub type DataBytes = SmallVec<[u8; 4]>;

fn out_of_range(spec: &ParameterSpec, value: i64, min: i64, max: i64) -> Error {
    Error::ValueOutOfRange {
        name: spec.name.to_string(),
        value,
        min,
        max,
    }
}

/// Integer division rounded half away from zero.
#[inline]
fn div_round(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if 2 * remainder.abs() >= denominator.abs() {
        quotient + numerator.signum() * denominator.signum()
    } else {
        quotient
    }
}

/// Convert a display value to its raw value.
pub fn to_raw(spec: &ParameterSpec, display: i64) -> Result<i64> {
    if let Some(map) = spec.value_map {
        return map
            .iter()
            .find(|(d, _)| *d == display)
            .map(|(_, raw)| *raw)
            .ok_or_else(|| out_of_range(spec, display, spec.display_min, spec.display_max));
    }

    if !spec.contains_display(display) {
        return Err(out_of_range(
            spec,
            display,
            spec.display_min,
            spec.display_max,
        ));
    }

    let raw = match spec.conversion {
        ConversionKind::Identity => display,
        ConversionKind::BipolarOffset(k) => display + k,
        ConversionKind::LinearRemap => {
            let display_span = spec.display_max - spec.display_min;
            if display_span == 0 {
                spec.raw_min
            } else {
                div_round(
                    (display - spec.display_min) * (spec.raw_max - spec.raw_min),
                    display_span,
                ) + spec.raw_min
            }
        }
        ConversionKind::NibbledSigned16 => display + NIBBLE_BIAS,
    };

    Ok(raw.clamp(spec.raw_min, spec.raw_max))
}

/// Convert a raw value back to its display value.
pub fn to_display(spec: &ParameterSpec, raw: i64) -> Result<i64> {
    if let Some(map) = spec.value_map {
        return map
            .iter()
            .find(|(_, r)| *r == raw)
            .map(|(display, _)| *display)
            .ok_or_else(|| out_of_range(spec, raw, spec.raw_min, spec.raw_max));
    }

    if !spec.contains_raw(raw) {
        return Err(out_of_range(spec, raw, spec.raw_min, spec.raw_max));
    }

    let display = match spec.conversion {
        ConversionKind::Identity => raw,
        ConversionKind::BipolarOffset(k) => raw - k,
        ConversionKind::LinearRemap => {
            // raw_min < raw_max is guaranteed by ParameterSpec::validate
            let raw_span = (spec.raw_max - spec.raw_min).max(1);
            div_round(
                (raw - spec.raw_min) * (spec.display_max - spec.display_min),
                raw_span,
            ) + spec.display_min
        }
        ConversionKind::NibbledSigned16 => raw - NIBBLE_BIAS,
    };

    Ok(display)
}

/// Split a 16-bit value into four nibbles, most significant first.
#[inline]
pub fn split_nibbles(value: u16) -> [u8; 4] {
    [
        ((value >> 12) & 0x0F) as u8,
        ((value >> 8) & 0x0F) as u8,
        ((value >> 4) & 0x0F) as u8,
        (value & 0x0F) as u8,
    ]
}

/// Reassemble four nibbles into a 16-bit value.
///
/// Fails with `MalformedNibbles` if fewer than four bytes are given or any
/// byte has bits above the low nibble set.
pub fn join_nibbles(bytes: &[u8]) -> Result<u16> {
    match bytes {
        [a, b, c, d] if [a, b, c, d].iter().all(|n| **n <= 0x0F) => {
            Ok(((*a as u16) << 12) | ((*b as u16) << 8) | ((*c as u16) << 4) | *d as u16)
        }
        _ => Err(Error::MalformedNibbles(bytes.to_vec())),
    }
}

/// Display value → wire data bytes (1 byte or 4 nibbles).
pub fn encode_data(spec: &ParameterSpec, display: i64) -> Result<DataBytes> {
    let raw = to_raw(spec, display)?;
    raw_to_data(spec, raw)
}

/// Raw value → wire data bytes.
pub fn raw_to_data(spec: &ParameterSpec, raw: i64) -> Result<DataBytes> {
    match spec.width {
        DataWidth::Byte => {
            if !(0..=0x7F).contains(&raw) {
                return Err(out_of_range(spec, raw, 0, 0x7F));
            }
            Ok(smallvec![raw as u8])
        }
        DataWidth::Nibbles4 => {
            if !(0..=0xFFFF).contains(&raw) {
                return Err(out_of_range(spec, raw, 0, 0xFFFF));
            }
            Ok(SmallVec::from_buf(split_nibbles(raw as u16)))
        }
    }
}

/// Wire data bytes → raw value. Reads exactly `spec.data_len()` bytes.
pub fn decode_data(spec: &ParameterSpec, bytes: &[u8]) -> Result<i64> {
    match spec.width {
        DataWidth::Byte => bytes
            .first()
            .map(|b| *b as i64)
            .ok_or_else(|| Error::MissingData {
                name: spec.name.to_string(),
                expected: 1,
                actual: 0,
            }),
        DataWidth::Nibbles4 => {
            let nibbles = bytes.get(..4).unwrap_or(bytes);
            join_nibbles(nibbles).map(i64::from)
        }
    }
}

/// Wire data bytes → display value.
pub fn decode_display(spec: &ParameterSpec, bytes: &[u8]) -> Result<i64> {
    let raw = decode_data(spec, bytes)?;
    to_display(spec, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    static RING: &[(i64, i64)] = &[(0, 0), (1, 2)];

    fn keyfollow() -> ParameterSpec {
        ParameterSpec::remap("FILTER_CUTOFF_KEYFOLLOW", 0x0D, (54, 74), (-100, 100))
    }

    #[test]
    fn test_identity() {
        let level = ParameterSpec::new("AMP_LEVEL", 0x15, 0, 127);
        assert_eq!(to_raw(&level, 100).unwrap(), 100);
        assert_eq!(to_display(&level, 100).unwrap(), 100);
        assert!(to_raw(&level, 128).is_err());
        assert!(to_raw(&level, -1).is_err());
    }

    #[test]
    fn test_bipolar_symmetry() {
        let depth = ParameterSpec::bipolar("FILTER_ENV_DEPTH", 0x14, 1, 127, 64);
        assert_eq!(to_raw(&depth, -63).unwrap(), 1);
        assert_eq!(to_raw(&depth, 63).unwrap(), 127);
        assert_eq!(to_raw(&depth, 0).unwrap(), 64);
        assert_eq!(to_display(&depth, 1).unwrap(), -63);
        assert_eq!(to_display(&depth, 127).unwrap(), 63);
        assert!(matches!(
            to_raw(&depth, 64),
            Err(Error::ValueOutOfRange { value: 64, .. })
        ));
    }

    #[test]
    fn test_bipolar_non_default_offset() {
        let gender = ParameterSpec::bipolar("AUTO_PITCH_GENDER", 0x0A, 0, 20, 10);
        assert_eq!(to_raw(&gender, -10).unwrap(), 0);
        assert_eq!(to_raw(&gender, 10).unwrap(), 20);
        assert_eq!(to_display(&gender, 10).unwrap(), 0);
    }

    #[test]
    fn test_linear_remap() {
        let kf = keyfollow();
        assert_eq!(to_display(&kf, 54).unwrap(), -100);
        assert_eq!(to_display(&kf, 64).unwrap(), 0);
        assert_eq!(to_display(&kf, 74).unwrap(), 100);
        assert_eq!(to_display(&kf, 55).unwrap(), -90);

        assert_eq!(to_raw(&kf, -100).unwrap(), 54);
        assert_eq!(to_raw(&kf, 0).unwrap(), 64);
        assert_eq!(to_raw(&kf, 100).unwrap(), 74);
        // Between steps rounds to the nearest raw value
        assert_eq!(to_raw(&kf, 14).unwrap(), 65);
        assert_eq!(to_raw(&kf, 15).unwrap(), 66);
        assert_eq!(to_raw(&kf, -15).unwrap(), 63);

        assert!(to_raw(&kf, 101).is_err());
        assert!(to_display(&kf, 53).is_err());
    }

    #[test]
    fn test_master_tune_worked_example() {
        // +50.0 cents, in tenths of a cent
        let tune = ParameterSpec::remap("MASTER_TUNE", 0x00, (24, 2024), (-1000, 1000)).nibbled();
        assert_eq!(to_raw(&tune, 500).unwrap(), 1524);
        assert_eq!(
            encode_data(&tune, 500).unwrap().as_slice(),
            &[0x00, 0x05, 0x0F, 0x04]
        );
        assert_eq!(to_raw(&tune, 0).unwrap(), 1024);
        assert_eq!(decode_display(&tune, &[0x00, 0x05, 0x0F, 0x04]).unwrap(), 500);
    }

    #[test]
    fn test_nibbled_signed_boundaries() {
        let p = ParameterSpec::nibbled_signed("EFX1_PARAM_1", 0x11);

        assert_eq!(to_raw(&p, -20000).unwrap(), 12768);
        let low = encode_data(&p, -20000).unwrap();
        assert_eq!(low.as_slice(), &[0x03, 0x01, 0x0E, 0x00]);
        assert_eq!(decode_display(&p, &low).unwrap(), -20000);

        assert_eq!(to_raw(&p, 20000).unwrap(), 52768);
        let high = encode_data(&p, 20000).unwrap();
        assert_eq!(high.as_slice(), &[0x0C, 0x0E, 0x02, 0x00]);
        assert_eq!(decode_display(&p, &high).unwrap(), 20000);

        assert!(to_raw(&p, 20001).is_err());
    }

    #[test]
    fn test_nibble_bias_is_source_of_truth() {
        // 08 00 03 06 reassembles to 32822, which is +54 under the 32768 bias
        let p = ParameterSpec::nibbled_signed("EFX1_PARAM_3", 0x19);
        assert_eq!(decode_data(&p, &[0x08, 0x00, 0x03, 0x06]).unwrap(), 32822);
        assert_eq!(decode_display(&p, &[0x08, 0x00, 0x03, 0x06]).unwrap(), 54);
    }

    #[test]
    fn test_malformed_nibbles() {
        assert_eq!(
            join_nibbles(&[0x08, 0x10, 0x03, 0x06]),
            Err(Error::MalformedNibbles(vec![0x08, 0x10, 0x03, 0x06]))
        );
        assert!(join_nibbles(&[0x08, 0x00]).is_err());

        let p = ParameterSpec::nibbled_signed("EFX2_PARAM_1", 0x11);
        assert!(matches!(
            decode_data(&p, &[0x7F, 0x00, 0x00, 0x00]),
            Err(Error::MalformedNibbles(_))
        ));
    }

    #[test]
    fn test_skip_reserved_switch() {
        let ring = ParameterSpec::switch_map("RING_SWITCH", 0x1F, RING);
        assert_eq!(to_raw(&ring, 0).unwrap(), 0);
        assert_eq!(to_raw(&ring, 1).unwrap(), 2);
        assert!(to_raw(&ring, 2).is_err());

        assert_eq!(to_display(&ring, 2).unwrap(), 1);
        assert!(to_display(&ring, 1).is_err());
    }

    #[test]
    fn test_byte_width_rejects_wide_raw() {
        let p = ParameterSpec::new("LEVEL", 0, 0, 127);
        assert!(raw_to_data(&p, 200).is_err());
        assert_eq!(raw_to_data(&p, 127).unwrap().as_slice(), &[0x7F]);
    }

    #[test]
    fn test_decode_data_empty() {
        let p = ParameterSpec::new("LEVEL", 0, 0, 127);
        assert!(matches!(
            decode_data(&p, &[]),
            Err(Error::MissingData { expected: 1, .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_split_join_nibbles(value in any::<u16>()) {
            prop_assert_eq!(join_nibbles(&split_nibbles(value)).unwrap(), value);
        }

        #[test]
        fn prop_keyfollow_raw_round_trip(raw in 54i64..=74) {
            let kf = keyfollow();
            let display = to_display(&kf, raw).unwrap();
            prop_assert_eq!(to_raw(&kf, display).unwrap(), raw);
        }

        #[test]
        fn prop_effect_display_round_trip(display in -20000i64..=20000) {
            let p = ParameterSpec::nibbled_signed("EFX1_PARAM_1", 0x11);
            let data = encode_data(&p, display).unwrap();
            prop_assert!(data.iter().all(|b| *b <= 0x0F));
            prop_assert_eq!(decode_display(&p, &data).unwrap(), display);
        }
    }
}
