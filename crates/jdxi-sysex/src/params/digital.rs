//! SuperNATURAL digital synth tone (temporary tone `19 01`/`19 21`).

use super::{bipolar63, keyfollow, level, name_chars, pan, switch, RING_SWITCH_MAP};
use crate::spec::ParameterSpec;

/// Digital tone common block (`.. .. 00 00`).
pub fn common() -> Vec<ParameterSpec> {
    let mut specs = name_chars("TONE_NAME");
    specs.extend([
        level("TONE_LEVEL", 0x0C),
        switch("PORTAMENTO_SWITCH", 0x12),
        level("PORTAMENTO_TIME", 0x13),
        switch("MONO_SWITCH", 0x14),
        ParameterSpec::bipolar("OCTAVE_SHIFT", 0x15, 61, 67, 64),
        ParameterSpec::new("PITCH_BEND_RANGE_UP", 0x16, 0, 24),
        ParameterSpec::new("PITCH_BEND_RANGE_DOWN", 0x17, 0, 24),
        switch("PARTIAL1_SWITCH", 0x19),
        switch("PARTIAL1_SELECT", 0x1A),
        switch("PARTIAL2_SWITCH", 0x1B),
        switch("PARTIAL2_SELECT", 0x1C),
        switch("PARTIAL3_SWITCH", 0x1D),
        switch("PARTIAL3_SELECT", 0x1E),
        ParameterSpec::switch_map("RING_SWITCH", 0x1F, RING_SWITCH_MAP),
        switch("UNISON_SWITCH", 0x2E),
        switch("PORTAMENTO_MODE", 0x31),
        switch("LEGATO_SWITCH", 0x32),
        level("ANALOG_FEEL", 0x34),
        level("WAVE_SHAPE", 0x35),
        level("TONE_CATEGORY", 0x36),
        ParameterSpec::new("PHRASE_NUMBER", 0x37, 0, 65535).nibbled(),
        ParameterSpec::bipolar("PHRASE_OCTAVE_SHIFT", 0x3B, 61, 67, 64),
        ParameterSpec::new("UNISON_SIZE", 0x3C, 0, 3),
    ]);
    specs
}

/// Digital partial block (`.. .. 20 00`, `21 00`, `22 00`).
pub fn partial() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec::new("OSC_WAVE", 0x00, 0, 7),
        ParameterSpec::new("OSC_WAVE_VARIATION", 0x01, 0, 2),
        ParameterSpec::bipolar("OSC_PITCH", 0x03, 40, 88, 64),
        ParameterSpec::bipolar("OSC_DETUNE", 0x04, 14, 114, 64),
        level("OSC_PULSE_WIDTH_MOD_DEPTH", 0x05),
        level("OSC_PULSE_WIDTH", 0x06),
        level("OSC_PITCH_ENV_ATTACK_TIME", 0x07),
        level("OSC_PITCH_ENV_DECAY", 0x08),
        bipolar63("OSC_PITCH_ENV_DEPTH", 0x09),
        ParameterSpec::new("FILTER_MODE", 0x0A, 0, 7),
        switch("FILTER_SLOPE", 0x0B),
        level("FILTER_CUTOFF", 0x0C),
        keyfollow("FILTER_CUTOFF_KEYFOLLOW", 0x0D),
        bipolar63("FILTER_ENV_VELOCITY_SENS", 0x0E),
        level("FILTER_RESONANCE", 0x0F),
        level("FILTER_ENV_ATTACK_TIME", 0x10),
        level("FILTER_ENV_DECAY_TIME", 0x11),
        level("FILTER_ENV_SUSTAIN_LEVEL", 0x12),
        level("FILTER_ENV_RELEASE_TIME", 0x13),
        bipolar63("FILTER_ENV_DEPTH", 0x14),
        level("AMP_LEVEL", 0x15),
        bipolar63("AMP_VELOCITY", 0x16),
        level("AMP_ENV_ATTACK_TIME", 0x17),
        level("AMP_ENV_DECAY_TIME", 0x18),
        level("AMP_ENV_SUSTAIN_LEVEL", 0x19),
        level("AMP_ENV_RELEASE_TIME", 0x1A),
        pan("AMP_PAN", 0x1B),
        ParameterSpec::new("LFO_SHAPE", 0x1C, 0, 5),
        level("LFO_RATE", 0x1D),
        switch("LFO_TEMPO_SYNC_SWITCH", 0x1E),
        ParameterSpec::new("LFO_TEMPO_SYNC_NOTE", 0x1F, 0, 19),
        level("LFO_FADE_TIME", 0x20),
        switch("LFO_KEY_TRIGGER", 0x21),
        bipolar63("LFO_PITCH_DEPTH", 0x22),
        bipolar63("LFO_FILTER_DEPTH", 0x23),
        bipolar63("LFO_AMP_DEPTH", 0x24),
        bipolar63("LFO_PAN_DEPTH", 0x25),
        ParameterSpec::new("MOD_LFO_SHAPE", 0x26, 0, 5),
        level("MOD_LFO_RATE", 0x27),
        switch("MOD_LFO_TEMPO_SYNC_SWITCH", 0x28),
        ParameterSpec::new("MOD_LFO_TEMPO_SYNC_NOTE", 0x29, 0, 19),
        level("OSC_PULSE_WIDTH_SHIFT", 0x2A),
        bipolar63("MOD_LFO_PITCH_DEPTH", 0x2C),
        bipolar63("MOD_LFO_FILTER_DEPTH", 0x2D),
        bipolar63("MOD_LFO_AMP_DEPTH", 0x2E),
        bipolar63("MOD_LFO_PAN_DEPTH", 0x2F),
        bipolar63("CUTOFF_AFTERTOUCH_SENS", 0x30),
        bipolar63("LEVEL_AFTERTOUCH_SENS", 0x31),
        ParameterSpec::new("WAVE_GAIN", 0x34, 0, 3),
        ParameterSpec::new("WAVE_NUMBER", 0x35, 0, 16384).nibbled(),
        level("HPF_CUTOFF", 0x39),
        level("SUPER_SAW_DETUNE", 0x3A),
        bipolar63("MOD_LFO_RATE_CONTROL", 0x3B),
        keyfollow("AMP_LEVEL_KEYFOLLOW", 0x3C),
    ]
}

/// Digital tone modify block (`.. .. 50 00`).
pub fn modify() -> Vec<ParameterSpec> {
    vec![
        level("ATTACK_TIME_INTERVAL_SENS", 0x01),
        level("RELEASE_TIME_INTERVAL_SENS", 0x02),
        level("PORTAMENTO_TIME_INTERVAL_SENS", 0x03),
        ParameterSpec::new("ENVELOPE_LOOP_MODE", 0x04, 0, 2),
        ParameterSpec::new("ENVELOPE_LOOP_SYNC_NOTE", 0x05, 0, 19),
        switch("CHROMATIC_PORTAMENTO", 0x06),
    ]
}
