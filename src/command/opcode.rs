//! Opcode definitions
//!
//! Single-byte device commands.

use std::fmt;

/// Single-byte sensor commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    SetIdleMode = 0x00,
    RunFingerDetect = 0x01,
    GetEnrollImage = 0x02,
    RunCalibration = 0x06,
    ReadCalibrationTable = 0x10,
    Heartbeat = 0x70,
}

impl Opcode {
    /// Wire value of the opcode
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Encode the opcode as a stand-alone transfer
    pub fn encode(self) -> [u8; 1] {
        [self.as_byte()]
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0x00 => Ok(Opcode::SetIdleMode),
            0x01 => Ok(Opcode::RunFingerDetect),
            0x02 => Ok(Opcode::GetEnrollImage),
            0x06 => Ok(Opcode::RunCalibration),
            0x10 => Ok(Opcode::ReadCalibrationTable),
            0x70 => Ok(Opcode::Heartbeat),
            other => Err(other),
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Opcode::SetIdleMode => "SET_IDLE_MODE",
            Opcode::RunFingerDetect => "RUN_FINGER_DETECT",
            Opcode::GetEnrollImage => "GET_ENROLL_IMAGE",
            Opcode::RunCalibration => "RUN_CALIBRATION",
            Opcode::ReadCalibrationTable => "READ_CALIBRATION_TABLE",
            Opcode::Heartbeat => "HEARTBEAT",
        };
        write!(f, "{} (0x{:02x})", name, self.as_byte())
    }
}
