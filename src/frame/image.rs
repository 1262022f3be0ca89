//! Image frames and decoded images
//!
//! Pixels are packed two per byte, high nibble first, starting at payload
//! offset [`PIXEL_OFFSET`].

use std::io::{self, Write};

use super::{FrameHeader, IMAGE_FRAME_SIZE};

/// Image width in pixels
pub const WIDTH: usize = 8;

/// Image height in pixels
pub const HEIGHT: usize = 192;

/// Largest 4-bit sample value
pub const MAX_VALUE: u8 = 15;

/// Payload offset of the continuation flag byte
pub const CONTINUATION_OFFSET: usize = 9;

/// Set in the continuation byte while more frames follow
pub const CONTINUATION_FLAG: u8 = 0x80;

/// Payload offset of the first packed pixel byte
pub const PIXEL_OFFSET: usize = 30;

const BYTES_PER_ROW: usize = WIDTH / 2;

/// Artifact name for the frame at `index`
pub fn frame_file_name(index: usize) -> String {
    format!("frame-{:05}.pnm", index)
}

/// A 0xE0 frame and its payload, exactly as declared by the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFrame {
    header: FrameHeader,
    payload: Vec<u8>,
}

impl ImageFrame {
    pub fn new(header: FrameHeader, payload: Vec<u8>) -> Self {
        Self { header, payload }
    }

    pub fn header(&self) -> FrameHeader {
        self.header
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Size declared in the header
    pub fn declared_size(&self) -> u16 {
        self.header.size
    }

    /// True when the header declares the standard 0x31E-byte payload
    pub fn has_expected_size(&self) -> bool {
        self.header.size == IMAGE_FRAME_SIZE
    }

    /// True when more frames of the same capture follow
    ///
    /// A payload too short to hold the flag counts as a terminal frame.
    pub fn has_continuation(&self) -> bool {
        self.payload
            .get(CONTINUATION_OFFSET)
            .map(|flag| flag & CONTINUATION_FLAG != 0)
            .unwrap_or(false)
    }

    pub fn decode(&self) -> DecodedImage {
        DecodedImage::from_payload(&self.payload)
    }
}

/// 8x192 grid of 4-bit samples, row-major, top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pixels: Vec<u8>,
}

impl DecodedImage {
    /// Unpack pixels from an image payload
    ///
    /// Pixel bytes past the end of a short payload decode as 0.
    pub fn from_payload(payload: &[u8]) -> Self {
        let mut pixels = Vec::with_capacity(WIDTH * HEIGHT);
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let byte = payload
                    .get(PIXEL_OFFSET + y * BYTES_PER_ROW + x / 2)
                    .copied()
                    .unwrap_or(0);
                let sample = if x % 2 == 0 { byte >> 4 } else { byte & 0x0f };
                pixels.push(sample);
            }
        }
        Self { pixels }
    }

    /// Sample at column `x`, row `y`
    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }
        Some(self.pixels[y * WIDTH + x])
    }

    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= HEIGHT {
            return None;
        }
        Some(&self.pixels[y * WIDTH..(y + 1) * WIDTH])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.pixels.chunks_exact(WIDTH)
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Write as plain PGM ("P2")
    ///
    /// Every sample is two decimal digits followed by a space; one row per line.
    pub fn write_pgm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "P2")?;
        writeln!(out, "{} {}", WIDTH, HEIGHT)?;
        writeln!(out, "{}", MAX_VALUE)?;
        for row in self.rows() {
            for sample in row {
                write!(out, "{:02} ", sample)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    pub fn to_pgm(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(16 + HEIGHT * (WIDTH * 3 + 1));
        // Writing into a Vec cannot fail
        let _ = self.write_pgm(&mut out);
        out
    }
}
