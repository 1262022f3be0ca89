//! Configuration for the AES2550 tools
//!
//! Centralized configuration with sensible defaults. Endpoints and the bulk
//! timeout are protocol constants and live in [`crate::transport`], not here.

use std::path::PathBuf;

use crate::error::{Result, SensorError};

/// AuthenTec vendor id
pub const DEFAULT_VENDOR_ID: u16 = 0x08ff;

/// AES2550/AES2810 product id
pub const DEFAULT_PRODUCT_ID: u16 = 0x2810;

/// Main configuration for a capture/extract run
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Device Configuration
    // -------------------------------------------------------------------------
    /// USB vendor id used to locate the sensor
    pub vendor_id: u16,

    /// USB product id used to locate the sensor
    pub product_id: u16,

    /// Interface claimed for the duration of the run
    pub interface: u8,

    // -------------------------------------------------------------------------
    // Output Configuration
    // -------------------------------------------------------------------------
    /// Raw stream written while streaming
    pub capture_path: PathBuf,

    /// Directory receiving `frame-NNNNN.pnm` files
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vendor_id: DEFAULT_VENDOR_ID,
            product_id: DEFAULT_PRODUCT_ID,
            interface: 0,
            capture_path: PathBuf::from("finger.dump"),
            output_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that paths are usable before touching the device
    pub fn validate(&self) -> Result<()> {
        if self.capture_path.as_os_str().is_empty() {
            return Err(SensorError::Config("capture path is empty".to_string()));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(SensorError::Config("output directory is empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the raw capture file path
    pub fn capture_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.capture_path = path.into();
        self
    }

    /// Set the directory for decoded frames
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_dir = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
