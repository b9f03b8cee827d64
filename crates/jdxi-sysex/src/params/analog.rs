//! Analog synth tone (temporary tone `19 42 00 00`).

use super::{bipolar63, keyfollow, level, name_chars, switch};
use crate::spec::ParameterSpec;

pub fn tone() -> Vec<ParameterSpec> {
    let mut specs = name_chars("TONE_NAME");
    specs.extend([
        ParameterSpec::new("LFO_SHAPE", 0x0D, 0, 5),
        level("LFO_RATE", 0x0E),
        level("LFO_FADE_TIME", 0x0F),
        switch("LFO_TEMPO_SYNC_SWITCH", 0x10),
        ParameterSpec::new("LFO_TEMPO_SYNC_NOTE", 0x11, 0, 19),
        bipolar63("LFO_PITCH_DEPTH", 0x12),
        bipolar63("LFO_FILTER_DEPTH", 0x13),
        bipolar63("LFO_AMP_DEPTH", 0x14),
        switch("LFO_KEY_TRIGGER", 0x15),
        ParameterSpec::new("OSC_WAVEFORM", 0x16, 0, 2),
        ParameterSpec::bipolar("OSC_PITCH_COARSE", 0x17, 40, 88, 64),
        ParameterSpec::bipolar("OSC_PITCH_FINE", 0x18, 14, 114, 64),
        level("OSC_PULSE_WIDTH", 0x19),
        level("OSC_PULSE_WIDTH_MOD_DEPTH", 0x1A),
        bipolar63("OSC_PITCH_ENV_VELOCITY_SENS", 0x1B),
        level("OSC_PITCH_ENV_ATTACK_TIME", 0x1C),
        level("OSC_PITCH_ENV_DECAY", 0x1D),
        bipolar63("OSC_PITCH_ENV_DEPTH", 0x1E),
        ParameterSpec::new("SUB_OSCILLATOR_TYPE", 0x1F, 0, 2),
        switch("FILTER_SWITCH", 0x20),
        level("FILTER_CUTOFF", 0x21),
        keyfollow("FILTER_CUTOFF_KEYFOLLOW", 0x22),
        level("FILTER_RESONANCE", 0x23),
        bipolar63("FILTER_ENV_VELOCITY_SENS", 0x24),
        level("FILTER_ENV_ATTACK_TIME", 0x25),
        level("FILTER_ENV_DECAY_TIME", 0x26),
        level("FILTER_ENV_SUSTAIN_LEVEL", 0x27),
        level("FILTER_ENV_RELEASE_TIME", 0x28),
        bipolar63("FILTER_ENV_DEPTH", 0x29),
        level("AMP_LEVEL", 0x2A),
        keyfollow("AMP_LEVEL_KEYFOLLOW", 0x2B),
        bipolar63("AMP_LEVEL_VELOCITY_SENS", 0x2C),
        level("AMP_ENV_ATTACK_TIME", 0x2D),
        level("AMP_ENV_DECAY_TIME", 0x2E),
        level("AMP_ENV_SUSTAIN_LEVEL", 0x2F),
        level("AMP_ENV_RELEASE_TIME", 0x30),
        switch("PORTAMENTO_SWITCH", 0x31),
        level("PORTAMENTO_TIME", 0x32),
        switch("LEGATO_SWITCH", 0x33),
        ParameterSpec::bipolar("OCTAVE_SHIFT", 0x34, 61, 67, 64),
        ParameterSpec::new("PITCH_BEND_RANGE_UP", 0x35, 0, 24),
        ParameterSpec::new("PITCH_BEND_RANGE_DOWN", 0x36, 0, 24),
        bipolar63("LFO_PITCH_MODULATION_CONTROL", 0x38),
        bipolar63("LFO_FILTER_MODULATION_CONTROL", 0x39),
        bipolar63("LFO_AMP_MODULATION_CONTROL", 0x3A),
        bipolar63("LFO_RATE_MODULATION_CONTROL", 0x3B),
    ]);
    specs
}
