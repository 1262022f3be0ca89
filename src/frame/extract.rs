//! Capture extraction
//!
//! Walks a capture with [`FrameReader`] and writes every image frame to a
//! numbered PGM file. Problems with individual frames are collected as
//! diagnostics; only I/O failures abort.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;

use super::{frame_file_name, Frame, FrameReader, ImageFrame, IMAGE_FRAME_SIZE};

/// Non-fatal observation made while extracting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// Image frame declared a size other than 0x31E; the declared size was used
    SizeMismatch { frame_index: usize, declared: u16 },

    /// Image frame had its continuation flag clear
    LastFrame { frame_index: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::SizeMismatch { frame_index, declared } => write!(
                f,
                "Bogus frame size: {:04x} (expected {:04x}) at frame {}",
                declared, IMAGE_FRAME_SIZE, frame_index
            ),
            Diagnostic::LastFrame { frame_index } => write!(f, "Last frame is {}", frame_index),
        }
    }
}

/// Summary of one extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractReport {
    /// Headers read, image or not
    pub frames: usize,

    /// Non-image frames skipped
    pub skipped: usize,

    /// Files written, in frame order
    pub images: Vec<PathBuf>,

    pub diagnostics: Vec<Diagnostic>,
}

impl ExtractReport {
    /// Indices of frames flagged as the last of their capture
    pub fn last_frames(&self) -> Vec<usize> {
        self.diagnostics
            .iter()
            .filter_map(|d| match d {
                Diagnostic::LastFrame { frame_index } => Some(*frame_index),
                _ => None,
            })
            .collect()
    }

    /// (frame index, declared size) of every mis-sized image frame
    pub fn size_mismatches(&self) -> Vec<(usize, u16)> {
        self.diagnostics
            .iter()
            .filter_map(|d| match d {
                Diagnostic::SizeMismatch { frame_index, declared } => {
                    Some((*frame_index, *declared))
                }
                _ => None,
            })
            .collect()
    }
}

/// Writes decoded frames of a capture into a directory
#[derive(Debug, Clone)]
pub struct Extractor {
    output_dir: PathBuf,
}

impl Extractor {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.output_dir.clone())
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Extract every image frame from the capture file at `path`
    pub fn extract_file(&self, path: &Path) -> Result<ExtractReport> {
        let file = File::open(path)?;
        self.extract(BufReader::new(file))
    }

    /// Extract every image frame from `reader`
    ///
    /// Frame numbering starts at 0 on every call, so extracting the same
    /// capture twice rewrites identical files.
    pub fn extract<R: Read>(&self, reader: R) -> Result<ExtractReport> {
        fs::create_dir_all(&self.output_dir)?;

        let mut report = ExtractReport::default();
        let mut frames = FrameReader::new(reader);

        while let Some(frame) = frames.next_frame()? {
            report.frames += 1;
            match frame {
                Frame::Skipped(_) => report.skipped += 1,
                Frame::Image(image) => {
                    let frame_index = report.images.len();
                    let path = self.write_image(frame_index, &image, &mut report)?;
                    report.images.push(path);
                }
            }
        }

        tracing::info!(
            "Extracted {} images from {} frames ({} skipped, {} bytes)",
            report.images.len(),
            report.frames,
            report.skipped,
            frames.position()
        );

        Ok(report)
    }

    fn write_image(
        &self,
        frame_index: usize,
        image: &ImageFrame,
        report: &mut ExtractReport,
    ) -> Result<PathBuf> {
        if !image.has_expected_size() {
            let diagnostic = Diagnostic::SizeMismatch {
                frame_index,
                declared: image.declared_size(),
            };
            tracing::warn!("{}", diagnostic);
            report.diagnostics.push(diagnostic);
        }

        if !image.has_continuation() {
            let diagnostic = Diagnostic::LastFrame { frame_index };
            tracing::info!("{}", diagnostic);
            report.diagnostics.push(diagnostic);
        }

        let path = self.output_dir.join(frame_file_name(frame_index));
        let mut out = BufWriter::new(File::create(&path)?);
        image.decode().write_pgm(&mut out)?;
        out.flush()?;

        tracing::debug!("Wrote {}", path.display());
        Ok(path)
    }
}
