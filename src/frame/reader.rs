//! Frame Reader
//!
//! Splits a capture stream into frames. Running out of bytes inside a
//! header or payload is the normal end of a capture, not an error.

use std::io::{self, Read};

use crate::error::Result;

use super::{FrameHeader, ImageFrame, HEADER_SIZE};

/// One frame from the capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Image frame with its full declared payload
    Image(ImageFrame),

    /// Housekeeping frame; its payload was skipped unread
    Skipped(FrameHeader),
}

impl Frame {
    pub fn header(&self) -> FrameHeader {
        match self {
            Frame::Image(image) => image.header(),
            Frame::Skipped(header) => *header,
        }
    }
}

/// Reads frames sequentially from a capture
pub struct FrameReader<R: Read> {
    reader: R,
    /// Bytes consumed so far
    position: u64,
    /// Set after end of input or an I/O error
    finished: bool,
}

impl<R: Read> FrameReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            position: 0,
            finished: false,
        }
    }

    /// Bytes consumed from the underlying reader
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Read the next frame
    ///
    /// Returns `Ok(None)` once the stream is exhausted, including when it
    /// ends part-way through a header, a skipped payload or an image payload.
    pub fn next_frame(&mut self) -> Result<Option<Frame>> {
        if self.finished {
            return Ok(None);
        }

        let mut raw = [0u8; HEADER_SIZE];
        if !self.read_full(&mut raw)? {
            return self.finish();
        }
        let header = FrameHeader::parse(raw);

        tracing::debug!("Frame type is {:02x}, size {:04x}", header.kind, header.size);

        if !header.is_image() {
            let wanted = u64::from(header.size);
            let skipped = io::copy(&mut (&mut self.reader).take(wanted), &mut io::sink())?;
            self.position += skipped;
            if skipped < wanted {
                return self.finish();
            }
            return Ok(Some(Frame::Skipped(header)));
        }

        let mut payload = vec![0u8; usize::from(header.size)];
        if !self.read_full(&mut payload)? {
            return self.finish();
        }

        Ok(Some(Frame::Image(ImageFrame::new(header, payload))))
    }

    fn finish(&mut self) -> Result<Option<Frame>> {
        self.finished = true;
        Ok(None)
    }

    /// Fill `buf` completely; `false` if the stream ended first
    fn read_full(&mut self, buf: &mut [u8]) -> Result<bool> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => {
                    self.position += filled as u64;
                    return Ok(false);
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.finished = true;
                    return Err(e.into());
                }
            }
        }
        self.position += filled as u64;
        Ok(true)
    }
}

impl<R: Read> Iterator for FrameReader<R> {
    type Item = Result<Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_frame().transpose()
    }
}
