//! Program effect blocks: Effect 1 (`18 00 02 00`), Effect 2 (`04 00`),
//! Delay (`06 00`) and Reverb (`08 00`).
//!
//! Every numbered effect parameter is a signed 16-bit value sent as four
//! nibbles with a +32768 bias. The meaning of each number depends on the
//! selected effect type.

use super::{level, switch};
use crate::spec::ParameterSpec;

pub const EFFECT_PARAM_COUNT: u16 = 32;
pub const DELAY_PARAM_COUNT: u16 = 24;
pub const REVERB_PARAM_COUNT: u16 = 24;

/// Effect 2 types: THRU, FLANGER, PHASER, RING MOD, SLICER. Raw 1..=4 are Effect 1 only.
pub static EFX2_TYPE_MAP: &[(i64, i64)] = &[(0, 0), (1, 5), (2, 6), (3, 7), (4, 8)];

fn numbered(prefix: &str, first: u16, count: u16) -> impl Iterator<Item = ParameterSpec> + '_ {
    (1..=count).map(move |i| {
        ParameterSpec::nibbled_signed(format!("{prefix}_PARAM_{i}"), first + 4 * (i - 1))
    })
}

pub fn effect1() -> Vec<ParameterSpec> {
    let mut specs = vec![
        ParameterSpec::new("EFX1_TYPE", 0x00, 0, 4),
        level("EFX1_LEVEL", 0x01),
        level("EFX1_DELAY_SEND_LEVEL", 0x02),
        level("EFX1_REVERB_SEND_LEVEL", 0x03),
        switch("EFX1_OUTPUT_ASSIGN", 0x04),
    ];
    specs.extend(numbered("EFX1", 0x11, EFFECT_PARAM_COUNT));
    specs
}

pub fn effect2() -> Vec<ParameterSpec> {
    let mut specs = vec![
        ParameterSpec::switch_map("EFX2_TYPE", 0x00, EFX2_TYPE_MAP),
        level("EFX2_LEVEL", 0x01),
        level("EFX2_DELAY_SEND_LEVEL", 0x02),
        level("EFX2_REVERB_SEND_LEVEL", 0x03),
    ];
    specs.extend(numbered("EFX2", 0x11, EFFECT_PARAM_COUNT));
    specs
}

pub fn delay() -> Vec<ParameterSpec> {
    let mut specs = vec![
        switch("DELAY_ON_OFF", 0x00),
        level("DELAY_LEVEL", 0x01),
        level("DELAY_REVERB_SEND_LEVEL", 0x03),
    ];
    specs.extend(numbered("DELAY", 0x04, DELAY_PARAM_COUNT));
    specs
}

pub fn reverb() -> Vec<ParameterSpec> {
    let mut specs = vec![
        switch("REVERB_ON_OFF", 0x00),
        level("REVERB_LEVEL", 0x01),
    ];
    specs.extend(numbered("REVERB", 0x03, REVERB_PARAM_COUNT));
    specs
}
