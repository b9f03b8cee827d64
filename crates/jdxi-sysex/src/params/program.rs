//! Temporary program blocks (`18 00 ..`): common and vocal effect.

use super::{level, name_chars, pan, switch};
use crate::spec::ParameterSpec;

/// Program common block (`18 00 00 00`).
pub fn common() -> Vec<ParameterSpec> {
    let mut specs = name_chars("PROGRAM_NAME");
    specs.extend([
        level("PROGRAM_LEVEL", 0x10),
        // 5.00..300.00 BPM in hundredths
        ParameterSpec::new("PROGRAM_TEMPO", 0x11, 500, 30000).nibbled(),
        ParameterSpec::new("VOCAL_EFFECT", 0x16, 0, 2),
        ParameterSpec::new("VOCAL_EFFECT_NUMBER", 0x1C, 0, 20),
        switch("VOCAL_EFFECT_PART", 0x1D),
        switch("AUTO_NOTE_SWITCH", 0x1E),
    ]);
    specs
}

/// Program vocal effect block (`18 00 01 00`).
pub fn vocal_effect() -> Vec<ParameterSpec> {
    vec![
        level("LEVEL", 0x00),
        pan("PAN", 0x01),
        level("DELAY_SEND_LEVEL", 0x02),
        level("REVERB_SEND_LEVEL", 0x03),
        ParameterSpec::new("OUTPUT_ASSIGN", 0x04, 0, 4),
        switch("AUTO_PITCH_SWITCH", 0x05),
        ParameterSpec::new("AUTO_PITCH_TYPE", 0x06, 0, 3),
        switch("AUTO_PITCH_SCALE", 0x07),
        ParameterSpec::new("AUTO_PITCH_KEY", 0x08, 0, 23),
        ParameterSpec::new("AUTO_PITCH_NOTE", 0x09, 0, 11),
        ParameterSpec::bipolar("AUTO_PITCH_GENDER", 0x0A, 0, 20, 10),
        ParameterSpec::bipolar("AUTO_PITCH_OCTAVE", 0x0B, 0, 2, 1),
        ParameterSpec::new("AUTO_PITCH_BALANCE", 0x0C, 0, 100),
        switch("VOCODER_SWITCH", 0x0D),
        ParameterSpec::new("VOCODER_ENVELOPE", 0x0E, 0, 2),
        level("VOCODER_LEVEL", 0x0F),
        level("VOCODER_MIC_SENS", 0x10),
        level("VOCODER_SYNTH_LEVEL", 0x11),
        level("VOCODER_MIC_MIX_LEVEL", 0x12),
        ParameterSpec::new("VOCODER_MIC_HPF", 0x13, 0, 13),
    ]
}
