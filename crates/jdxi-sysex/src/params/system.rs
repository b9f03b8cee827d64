//! System blocks (`02 00 ..`): common and controller.

use super::{level, switch};
use crate::spec::ParameterSpec;

/// System common block (`02 00 00 00`).
pub fn common() -> Vec<ParameterSpec> {
    vec![
        // -100.0..+100.0 cents in tenths, 1024 = 0 cents
        ParameterSpec::remap("MASTER_TUNE", 0x00, (24, 2024), (-1000, 1000)).nibbled(),
        ParameterSpec::bipolar("MASTER_KEY_SHIFT", 0x04, 40, 88, 64),
        level("MASTER_LEVEL", 0x05),
        // 0-15 = channel 1-16, 16 = OFF
        ParameterSpec::new("PROGRAM_CONTROL_CHANNEL", 0x11, 0, 16),
        switch("RECEIVE_PROGRAM_CHANGE", 0x29),
        switch("RECEIVE_BANK_SELECT", 0x2A),
    ]
}

/// System controller block (`02 00 03 00`).
pub fn controller() -> Vec<ParameterSpec> {
    vec![
        switch("TRANSMIT_PROGRAM_CHANGE", 0x00),
        switch("TRANSMIT_BANK_SELECT", 0x01),
        // 0 = REAL
        level("KEYBOARD_VELOCITY", 0x02),
        ParameterSpec::new("KEYBOARD_VELOCITY_CURVE", 0x03, 1, 3),
        ParameterSpec::bipolar("KEYBOARD_VELOCITY_CURVE_OFFSET", 0x04, 54, 73, 64),
    ]
}
