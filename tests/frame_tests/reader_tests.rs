//! Tests for the Frame Reader
//!
//! These tests verify:
//! - Big-endian header parsing
//! - Skipping of non-image frames by exactly their declared size
//! - Image payloads read at their declared size
//! - Truncated input treated as end of stream

use std::io::{self, Cursor, Read};

use aes2550::frame::{Frame, FrameHeader, FrameReader, IMAGE_FRAME_SIZE, IMAGE_FRAME_TYPE};
use aes2550::SensorError;

// =============================================================================
// Helper Functions
// =============================================================================

fn raw_frame(kind: u8, payload: &[u8]) -> Vec<u8> {
    let mut bytes = FrameHeader::new(kind, payload.len() as u16).encode().to_vec();
    bytes.extend_from_slice(payload);
    bytes
}

fn image_payload(fill: u8) -> Vec<u8> {
    vec![fill; IMAGE_FRAME_SIZE as usize]
}

/// Reader that fails on the first call
struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "boom"))
    }
}

// =============================================================================
// Header Tests
// =============================================================================

#[test]
fn test_header_parse_big_endian() {
    let header = FrameHeader::parse([0xe0, 0x03, 0x1e]);
    assert_eq!(header.kind, IMAGE_FRAME_TYPE);
    assert_eq!(header.size, 798);
    assert!(header.is_image());

    let header = FrameHeader::parse([0x01, 0x01, 0x02]);
    assert_eq!(header.size, 0x0102);
    assert!(!header.is_image());
}

#[test]
fn test_header_encode() {
    assert_eq!(FrameHeader::new(0xe0, 0x031e).encode(), [0xe0, 0x03, 0x1e]);
    assert_eq!(
        FrameHeader::parse(FrameHeader::new(0x42, 0xbeef).encode()),
        FrameHeader::new(0x42, 0xbeef)
    );
}

// =============================================================================
// Skip Tests
// =============================================================================

#[test]
fn test_skip_non_image_frame_exactly() {
    // Payload looks like an image header; it must not be interpreted
    let junk = [0xe0, 0x03, 0x1e, 0xe0, 0x03, 0x1e, 0x00, 0x00, 0x00, 0x00];
    let mut capture = raw_frame(0x01, &junk);
    capture.extend(raw_frame(0x02, &[0xff; 3]));

    let mut reader = FrameReader::new(Cursor::new(capture));

    let first = reader.next_frame().unwrap().unwrap();
    assert_eq!(first, Frame::Skipped(FrameHeader::new(0x01, 10)));
    assert_eq!(reader.position(), 13);

    let second = reader.next_frame().unwrap().unwrap();
    assert_eq!(second, Frame::Skipped(FrameHeader::new(0x02, 3)));
    assert_eq!(reader.position(), 19);

    assert!(reader.next_frame().unwrap().is_none());
}

#[test]
fn test_skip_past_end_stops() {
    let mut capture = vec![0x01, 0x00, 0x0a];
    capture.extend_from_slice(&[0u8; 5]);

    let mut reader = FrameReader::new(Cursor::new(capture));
    assert!(reader.next_frame().unwrap().is_none());
    assert_eq!(reader.position(), 8);
    assert!(reader.next_frame().unwrap().is_none());
}

#[test]
fn test_zero_sized_frame() {
    let mut capture = raw_frame(0x05, &[]);
    capture.extend(raw_frame(IMAGE_FRAME_TYPE, &image_payload(0x11)));

    let frames: Vec<Frame> = FrameReader::new(Cursor::new(capture))
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].header(), FrameHeader::new(0x05, 0));
    assert!(matches!(frames[1], Frame::Image(_)));
}

// =============================================================================
// Image Frame Tests
// =============================================================================

#[test]
fn test_read_image_frame() {
    let capture = raw_frame(IMAGE_FRAME_TYPE, &image_payload(0xab));
    let mut reader = FrameReader::new(Cursor::new(capture));

    match reader.next_frame().unwrap().unwrap() {
        Frame::Image(image) => {
            assert_eq!(image.declared_size(), IMAGE_FRAME_SIZE);
            assert!(image.has_expected_size());
            assert_eq!(image.payload().len(), 798);
        }
        other => panic!("Expected image frame, got {:?}", other),
    }
    assert_eq!(reader.position(), 3 + 798);
}

#[test]
fn test_mismatched_size_uses_declared_size() {
    let mut capture = raw_frame(IMAGE_FRAME_TYPE, &vec![0x22; 0x300]);
    capture.extend(raw_frame(0x01, &[0x00; 2]));

    let mut reader = FrameReader::new(Cursor::new(capture));

    match reader.next_frame().unwrap().unwrap() {
        Frame::Image(image) => {
            assert_eq!(image.declared_size(), 0x300);
            assert!(!image.has_expected_size());
            assert_eq!(image.payload().len(), 0x300);
        }
        other => panic!("Expected image frame, got {:?}", other),
    }

    // Next header starts right after the 0x300 declared bytes
    let next = reader.next_frame().unwrap().unwrap();
    assert_eq!(next, Frame::Skipped(FrameHeader::new(0x01, 2)));
}

// =============================================================================
// Truncation Tests
// =============================================================================

#[test]
fn test_empty_stream() {
    let mut reader = FrameReader::new(Cursor::new(Vec::<u8>::new()));
    assert!(reader.next_frame().unwrap().is_none());
}

#[test]
fn test_partial_header() {
    let mut reader = FrameReader::new(Cursor::new(vec![0xe0, 0x03]));
    assert!(reader.next_frame().unwrap().is_none());
}

#[test]
fn test_truncated_image_payload() {
    let mut capture = raw_frame(IMAGE_FRAME_TYPE, &image_payload(0x00));
    capture.extend(raw_frame(IMAGE_FRAME_TYPE, &image_payload(0x00)));
    capture.truncate(capture.len() - 1);

    let frames: Vec<Frame> = FrameReader::new(Cursor::new(capture))
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(frames.len(), 1);
}

#[test]
fn test_io_error_propagates() {
    let mut reader = FrameReader::new(FailingReader);

    match reader.next() {
        Some(Err(SensorError::Io(e))) => assert_eq!(e.kind(), io::ErrorKind::Other),
        other => panic!("Expected IO error, got {:?}", other),
    }
    assert!(reader.next().is_none());
}
