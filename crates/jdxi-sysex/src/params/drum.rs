//! Drum kit (temporary tone `19 70`). One common block plus one partial block
//! per pad, notes 36..=72.

use super::{bipolar63, ext, level, name_chars, pan, switch};
use crate::spec::ParameterSpec;

/// Number of wave layers (WMT1..WMT4) in a drum partial.
pub const WMT_LAYERS: u16 = 4;
const WMT_BASE: u16 = 0x21;
const WMT_STRIDE: u16 = 0x1D;

/// Drum kit common block (`19 70 00 00`).
pub fn common() -> Vec<ParameterSpec> {
    let mut specs = name_chars("KIT_NAME");
    specs.push(level("KIT_LEVEL", 0x0C));
    specs
}

/// Drum partial block (`19 70 2E 00` .. `19 70 76 00`).
pub fn partial() -> Vec<ParameterSpec> {
    let mut specs = name_chars("PARTIAL_NAME");
    specs.extend([
        switch("ASSIGN_TYPE", 0x0C),
        ParameterSpec::new("MUTE_GROUP", 0x0D, 0, 31),
        level("PARTIAL_LEVEL", 0x0E),
        level("PARTIAL_COARSE_TUNE", 0x0F),
        ParameterSpec::bipolar("PARTIAL_FINE_TUNE", 0x10, 14, 114, 64),
        ParameterSpec::new("PARTIAL_RANDOM_PITCH_DEPTH", 0x11, 0, 30),
        pan("PARTIAL_PAN", 0x12),
        ParameterSpec::new("PARTIAL_RANDOM_PAN_DEPTH", 0x13, 0, 63),
        bipolar63("PARTIAL_ALTERNATE_PAN_DEPTH", 0x14),
        switch("PARTIAL_ENV_MODE", 0x15),
        level("PARTIAL_OUTPUT_LEVEL", 0x16),
        level("PARTIAL_CHORUS_SEND_LEVEL", 0x19),
        level("PARTIAL_REVERB_SEND_LEVEL", 0x1A),
        ParameterSpec::new("PARTIAL_OUTPUT_ASSIGN", 0x1B, 0, 4),
        ParameterSpec::new("PARTIAL_PITCH_BEND_RANGE", 0x1C, 0, 48),
        switch("PARTIAL_RECEIVE_EXPRESSION", 0x1D),
        switch("PARTIAL_RECEIVE_HOLD_1", 0x1E),
        ParameterSpec::new("WMT_VELOCITY_CONTROL", 0x20, 0, 2),
    ]);

    for layer in 1..=WMT_LAYERS {
        specs.extend(wave_layer(layer));
    }

    specs.extend([
        ParameterSpec::bipolar("PITCH_ENV_DEPTH", ext(0x01, 0x15), 52, 76, 64),
        bipolar63("PITCH_ENV_VELOCITY_SENS", ext(0x01, 0x16)),
        bipolar63("PITCH_ENV_TIME1_VELOCITY_SENS", ext(0x01, 0x17)),
        bipolar63("PITCH_ENV_TIME4_VELOCITY_SENS", ext(0x01, 0x18)),
    ]);
    specs.extend((1..=4).map(|i| level(format!("PITCH_ENV_TIME_{i}"), ext(0x01, 0x18) + i)));
    specs.extend((0..=4).map(|i| bipolar63(format!("PITCH_ENV_LEVEL_{i}"), ext(0x01, 0x1D) + i)));

    specs.extend([
        ParameterSpec::new("TVF_FILTER_TYPE", ext(0x01, 0x22), 0, 6),
        level("TVF_CUTOFF_FREQUENCY", ext(0x01, 0x23)),
        ParameterSpec::new("TVF_CUTOFF_VELOCITY_CURVE", ext(0x01, 0x24), 0, 7),
        bipolar63("TVF_CUTOFF_VELOCITY_SENS", ext(0x01, 0x25)),
        level("TVF_RESONANCE", ext(0x01, 0x26)),
        bipolar63("TVF_RESONANCE_VELOCITY_SENS", ext(0x01, 0x27)),
        bipolar63("TVF_ENV_DEPTH", ext(0x01, 0x28)),
        ParameterSpec::new("TVF_ENV_VELOCITY_CURVE_TYPE", ext(0x01, 0x29), 0, 7),
        bipolar63("TVF_ENV_VELOCITY_SENS", ext(0x01, 0x2A)),
        bipolar63("TVF_ENV_TIME1_VELOCITY_SENS", ext(0x01, 0x2B)),
        bipolar63("TVF_ENV_TIME4_VELOCITY_SENS", ext(0x01, 0x2C)),
    ]);
    specs.extend((1..=4).map(|i| level(format!("TVF_ENV_TIME_{i}"), ext(0x01, 0x2C) + i)));
    specs.extend((0..=4).map(|i| level(format!("TVF_ENV_LEVEL_{i}"), ext(0x01, 0x31) + i)));

    specs.extend([
        ParameterSpec::new("TVA_LEVEL_VELOCITY_CURVE", ext(0x01, 0x36), 0, 7),
        bipolar63("TVA_LEVEL_VELOCITY_SENS", ext(0x01, 0x37)),
        bipolar63("TVA_ENV_TIME1_VELOCITY_SENS", ext(0x01, 0x38)),
        bipolar63("TVA_ENV_TIME4_VELOCITY_SENS", ext(0x01, 0x39)),
    ]);
    specs.extend((1..=4).map(|i| level(format!("TVA_ENV_TIME_{i}"), ext(0x01, 0x39) + i)));
    specs.extend((1..=3).map(|i| level(format!("TVA_ENV_LEVEL_{i}"), ext(0x01, 0x3D) + i)));

    specs.extend([
        switch("ONE_SHOT_MODE", ext(0x01, 0x41)),
        pan("RELATIVE_LEVEL", ext(0x01, 0x42)),
    ]);
    specs
}

/// One WMT wave layer, 1-based.
fn wave_layer(layer: u16) -> Vec<ParameterSpec> {
    let base = WMT_BASE + (layer - 1) * WMT_STRIDE;
    let name = |field: &str| format!("WMT{layer}_{field}");

    vec![
        switch(name("WAVE_SWITCH"), base),
        ParameterSpec::new(name("WAVE_GROUP_TYPE"), base + 0x01, 0, 0),
        ParameterSpec::new(name("WAVE_GROUP_ID"), base + 0x02, 0, 16384).nibbled(),
        ParameterSpec::new(name("WAVE_NUMBER_L"), base + 0x06, 0, 16384).nibbled(),
        ParameterSpec::new(name("WAVE_NUMBER_R"), base + 0x0A, 0, 16384).nibbled(),
        ParameterSpec::new(name("WAVE_GAIN"), base + 0x0E, 0, 3),
        switch(name("WAVE_FXM_SWITCH"), base + 0x0F),
        ParameterSpec::new(name("WAVE_FXM_COLOR"), base + 0x10, 0, 3),
        ParameterSpec::new(name("WAVE_FXM_DEPTH"), base + 0x11, 0, 16),
        switch(name("WAVE_TEMPO_SYNC"), base + 0x12),
        ParameterSpec::bipolar(name("WAVE_COARSE_TUNE"), base + 0x13, 16, 112, 64),
        ParameterSpec::bipolar(name("WAVE_FINE_TUNE"), base + 0x14, 14, 114, 64),
        pan(name("WAVE_PAN"), base + 0x15),
        switch(name("WAVE_RANDOM_PAN_SWITCH"), base + 0x16),
        ParameterSpec::new(name("WAVE_ALTERNATE_PAN_SWITCH"), base + 0x17, 0, 2),
        level(name("WAVE_LEVEL"), base + 0x18),
        ParameterSpec::new(name("VELOCITY_RANGE_LOWER"), base + 0x19, 1, 127),
        ParameterSpec::new(name("VELOCITY_RANGE_UPPER"), base + 0x1A, 1, 127),
        level(name("VELOCITY_FADE_WIDTH_LOWER"), base + 0x1B),
        level(name("VELOCITY_FADE_WIDTH_UPPER"), base + 0x1C),
    ]
}
