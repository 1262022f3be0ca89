//! Register-write programs
//!
//! An ordered batch of instructions sent to the sensor as one bulk write.

use bytes::{BufMut, Bytes, BytesMut};

use super::Opcode;

/// One element of a program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Write `value` into `register`
    Register { register: u8, value: u8 },

    /// Heartbeat sub-command: idle-cycle timing for detect/capture
    Heartbeat { params: [u8; 3] },

    /// Bare opcode
    Opcode(Opcode),
}

impl Instruction {
    /// Number of bytes this instruction occupies on the wire
    pub fn encoded_len(&self) -> usize {
        match self {
            Instruction::Register { .. } => 2,
            Instruction::Heartbeat { .. } => 4,
            Instruction::Opcode(_) => 1,
        }
    }

    fn encode_into(&self, buf: &mut BytesMut) {
        match *self {
            Instruction::Register { register, value } => {
                buf.put_u8(register);
                buf.put_u8(value);
            }
            Instruction::Heartbeat { params } => {
                buf.put_u8(Opcode::Heartbeat.as_byte());
                buf.put_slice(&params);
            }
            Instruction::Opcode(op) => buf.put_u8(op.as_byte()),
        }
    }
}

/// Ordered list of instructions transmitted as one contiguous write
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Create an empty program
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a register write
    pub fn register(mut self, register: u8, value: u8) -> Self {
        self.instructions
            .push(Instruction::Register { register, value });
        self
    }

    /// Append a heartbeat sub-command
    pub fn heartbeat(mut self, params: [u8; 3]) -> Self {
        self.instructions.push(Instruction::Heartbeat { params });
        self
    }

    /// Append an opcode
    pub fn opcode(mut self, op: Opcode) -> Self {
        self.instructions.push(Instruction::Opcode(op));
        self
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of (register, value) pairs in the program
    pub fn register_count(&self) -> usize {
        self.instructions
            .iter()
            .filter(|i| matches!(i, Instruction::Register { .. }))
            .count()
    }

    /// Byte count the device must acknowledge for the write to succeed
    pub fn encoded_len(&self) -> usize {
        self.instructions.iter().map(Instruction::encoded_len).sum()
    }

    /// Encode to the exact bytes placed on the wire
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.encoded_len());
        for instruction in &self.instructions {
            instruction.encode_into(&mut buf);
        }
        buf.freeze()
    }
}
