//! Frame header
//!
//! Three bytes: type, then payload size big-endian.

use bytes::Buf;

/// Header size: 1 byte type + 2 bytes size
pub const HEADER_SIZE: usize = 3;

/// Type byte of an image frame
pub const IMAGE_FRAME_TYPE: u8 = 0xe0;

/// Payload size every image frame is expected to declare
pub const IMAGE_FRAME_SIZE: u16 = 0x31e;

/// Parsed frame header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Frame type byte
    pub kind: u8,

    /// Declared payload size in bytes
    pub size: u16,
}

impl FrameHeader {
    pub fn new(kind: u8, size: u16) -> Self {
        Self { kind, size }
    }

    /// Parse `[type][size_msb][size_lsb]`
    pub fn parse(bytes: [u8; HEADER_SIZE]) -> Self {
        let mut buf = &bytes[..];
        let kind = buf.get_u8();
        let size = buf.get_u16();
        Self { kind, size }
    }

    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let [msb, lsb] = self.size.to_be_bytes();
        [self.kind, msb, lsb]
    }

    pub fn is_image(&self) -> bool {
        self.kind == IMAGE_FRAME_TYPE
    }
}
