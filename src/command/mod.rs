//! Command Module
//!
//! Encodes the host-to-device commands understood by the sensor.
//!
//! ## Wire Format
//!
//! Everything the host sends is a flat byte string written to bulk OUT in a
//! single transfer. A program mixes three kinds of instruction:
//! ```text
//! Register write:  ┌──────────┬──────────┐
//!                  │ Reg (1)  │ Value(1) │
//!                  └──────────┴──────────┘
//! Heartbeat:       ┌──────────┬────────────────────────────┐
//!                  │ 0x70 (1) │ Params (3)                 │
//!                  └──────────┴────────────────────────────┘
//! Opcode:          ┌──────────┐
//!                  │ Op (1)   │
//!                  └──────────┘
//! ```
//!
//! ### Opcodes
//! - 0x00: SET_IDLE_MODE
//! - 0x01: RUN_FINGER_DETECT
//! - 0x02: GET_ENROLL_IMAGE
//! - 0x06: RUN_CALIBRATION
//! - 0x10: READ_CALIBRATION_TABLE
//! - 0x70: HEARTBEAT (3 parameter bytes follow)
//!
//! A transfer only counts as delivered when the device accepted exactly
//! [`Program::encoded_len`] bytes.

mod opcode;
mod program;
pub mod programs;

pub use opcode::Opcode;
pub use program::{Instruction, Program};

/// Control register; writing [`MASTER_RESET`] resets the sensor
pub const REG_CONTROL: u8 = 0x80;

/// Master reset bit of [`REG_CONTROL`]
pub const MASTER_RESET: u8 = 1 << 0;
