//! Frame Module
//!
//! Offline decoding of a raw capture into grayscale frames.
//!
//! ## Capture Format
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │ Frame 1                                             │
//! │ ┌──────────┬──────────┬──────────┬────────────────┐ │
//! │ │ Type (1) │ MSB (1)  │ LSB (1)  │ Payload (size) │ │
//! │ └──────────┴──────────┴──────────┴────────────────┘ │
//! ├─────────────────────────────────────────────────────┤
//! │ Frame 2 ...                                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Only type 0xE0 carries an image; everything else is skipped unread.
//!
//! ## Image Payload (0x31E bytes)
//! ```text
//! offset 9    continuation flag (0x80: more frames follow)
//! offset 30   192 rows × 4 bytes, two 4-bit pixels per byte (high first)
//! ```

mod header;
mod reader;
mod image;
mod extract;

pub use header::{FrameHeader, HEADER_SIZE, IMAGE_FRAME_SIZE, IMAGE_FRAME_TYPE};
pub use reader::{Frame, FrameReader};
pub use image::{
    frame_file_name, DecodedImage, ImageFrame, CONTINUATION_FLAG, CONTINUATION_OFFSET, HEIGHT,
    MAX_VALUE, PIXEL_OFFSET, WIDTH,
};
pub use extract::{Diagnostic, ExtractReport, Extractor};
