//! Error types for the AES2550 tools
//!
//! Provides a unified error type for device and capture operations.

use thiserror::Error;

use crate::sensor::Step;

/// Result type alias using SensorError
pub type Result<T> = std::result::Result<T, SensorError>;

/// Unified error type for sensor and extraction operations
#[derive(Debug, Error)]
pub enum SensorError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Device Errors
    // -------------------------------------------------------------------------
    #[error("USB error: {0}")]
    Usb(#[from] rusb::Error),

    #[error("Can't open device {vendor_id:04x}:{product_id:04x}")]
    DeviceNotFound { vendor_id: u16, product_id: u16 },

    #[error("Failed to claim interface {interface}: {source}")]
    ClaimInterface {
        interface: u8,
        #[source]
        source: rusb::Error,
    },

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Transfer failed during {step}: {source}")]
    Transfer {
        step: Step,
        #[source]
        source: rusb::Error,
    },

    #[error("Short transfer during {step}: expected {expected} bytes, transferred {actual}")]
    ShortTransfer {
        step: Step,
        expected: usize,
        actual: usize,
    },

    #[error("Capture cancelled")]
    Cancelled,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SensorError {
    /// True for errors raised by the bulk-transfer protocol itself
    pub fn is_transfer_error(&self) -> bool {
        matches!(
            self,
            SensorError::Transfer { .. } | SensorError::ShortTransfer { .. }
        )
    }
}
