//! Response buffer
//!
//! Reused target for every bulk IN read.

use crate::transport::{TransferResult, Transport, BULK_TIMEOUT, EP_IN};

/// Capacity requested on every bulk read
pub const RESPONSE_CAPACITY: usize = 8192;

/// Offset of the finger-detect status byte
pub const STATUS_OFFSET: usize = 1;

/// Bit of the status byte set once a finger is on the sensor
pub const FINGER_PRESENT: u8 = 0x80;

/// Fixed-capacity buffer holding the bytes of the most recent read
pub struct ResponseBuffer {
    data: Box<[u8; RESPONSE_CAPACITY]>,
    len: usize,
}

impl ResponseBuffer {
    pub fn new() -> Self {
        Self {
            data: Box::new([0u8; RESPONSE_CAPACITY]),
            len: 0,
        }
    }

    /// Overwrite the buffer with one bulk read
    ///
    /// On failure the buffer is left empty.
    pub fn fill<T: Transport + ?Sized>(&mut self, transport: &mut T) -> TransferResult {
        self.len = 0;
        let n = transport.bulk_read(EP_IN, &mut self.data[..], BULK_TIMEOUT)?;
        self.len = n.min(RESPONSE_CAPACITY);
        Ok(self.len)
    }

    /// Bytes received by the last read
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Received byte at `offset`, if the last read reached that far
    pub fn byte(&self, offset: usize) -> Option<u8> {
        self.as_slice().get(offset).copied()
    }

    /// Finger-detect status byte, if present
    pub fn status(&self) -> Option<u8> {
        self.byte(STATUS_OFFSET)
    }

    /// True when the finger-detect status byte has bit 0x80 set
    pub fn finger_present(&self) -> bool {
        self.status()
            .map(|status| status & FINGER_PRESENT != 0)
            .unwrap_or(false)
    }
}

impl Default for ResponseBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ResponseBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseBuffer")
            .field("len", &self.len)
            .field("status", &self.status())
            .finish()
    }
}
