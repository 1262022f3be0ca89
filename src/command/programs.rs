//! Fixed programs for each protocol phase
//!
//! Register values come from USB traces of the vendor driver; they are not
//! documented beyond the master reset bit.

use super::{Opcode, Program, MASTER_RESET, REG_CONTROL};

/// Heartbeat used while waiting for a finger
pub const FINGER_DETECT_HEARTBEAT: [u8; 3] = [0x00, 0x01, 0x00];

/// Heartbeat used while streaming an image
pub const IMAGE_CAPTURE_HEARTBEAT: [u8; 3] = [0x00, 0x01, 0x03];

/// Program A: master reset and sensor initialisation
pub fn init() -> Program {
    Program::new()
        .register(REG_CONTROL, MASTER_RESET)
        .register(0xa1, 0x00)
        .register(0x80, 0x12)
        .register(0x85, 0x80)
        .register(0xa8, 0x10)
        .register(0xb1, 0x20)
        .register(0x81, 0x04)
}

/// Program B: master reset, then run calibration and read the table back
pub fn calibrate() -> Program {
    Program::new()
        .register(REG_CONTROL, MASTER_RESET)
        .register(0xdd, 0x00)
        .opcode(Opcode::RunCalibration)
        .opcode(Opcode::ReadCalibrationTable)
}

/// Program C: finger-detect mode, then start detection
pub fn finger_detect() -> Program {
    Program::new()
        .register(REG_CONTROL, MASTER_RESET)
        .register(0x95, 0x18)
        .register(0xa1, 0x00)
        .register(0x8a, 0x07)
        .register(0xad, 0x00)
        .register(0xbd, 0x00)
        .register(0xbe, 0x00)
        .register(0xcf, 0x01)
        .register(0xdd, 0x00)
        .heartbeat(FINGER_DETECT_HEARTBEAT)
        .opcode(Opcode::RunFingerDetect)
}

/// Program D: image-capture mode, then start streaming
pub fn image_capture() -> Program {
    Program::new()
        .register(REG_CONTROL, MASTER_RESET)
        .register(0x80, 0x18)
        .register(0x85, 0x00)
        .register(0x8f, 0x0c)
        .register(0x9c, 0xbf)
        .register(0x9d, 0x46)
        .register(0x9e, 0x71)
        .register(0x9f, 0x23)
        .register(0xa2, 0x00)
        .register(0xb1, 0x00)
        .register(0xbf, 0x0b)
        .register(0xcf, 0x32)
        .register(0xdc, 0x01)
        .register(0xdd, 0x00)
        .heartbeat(IMAGE_CAPTURE_HEARTBEAT)
        .opcode(Opcode::GetEnrollImage)
}

/// Single register write returning the sensor to reset-idle after streaming
pub fn idle_reset() -> Program {
    Program::new().register(REG_CONTROL, MASTER_RESET)
}

/// Stand-alone idle-mode opcode used when a phase aborts
pub fn set_idle_mode() -> Program {
    Program::new().opcode(Opcode::SetIdleMode)
}
