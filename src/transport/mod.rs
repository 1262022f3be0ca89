//! Transport Module
//!
//! Bulk-transfer primitives used by the sensor state machine.
//!
//! ## Endpoints
//! ```text
//! ┌──────────────┬──────────┬───────────────────────────────┐
//! │ Endpoint     │ Address  │ Carries                       │
//! ├──────────────┼──────────┼───────────────────────────────┤
//! │ bulk OUT 2   │ 0x02     │ register programs, opcodes    │
//! │ bulk IN 1    │ 0x81     │ responses, framed image data  │
//! └──────────────┴──────────┴───────────────────────────────┘
//! ```
//!
//! Every call blocks for at most [`BULK_TIMEOUT`]. A transfer either fails
//! with a [`rusb::Error`] or reports the number of bytes moved; a short count
//! is not an error at this layer.

mod usb;
mod mock;

use std::time::Duration;

pub use usb::UsbTransport;
pub use mock::{MockTransport, WriteBehavior};

/// Bulk IN endpoint (endpoint 1, device-to-host)
pub const EP_IN: u8 = 0x81;

/// Bulk OUT endpoint (endpoint 2, host-to-device)
pub const EP_OUT: u8 = 0x02;

/// Timeout applied to every bulk transfer
pub const BULK_TIMEOUT: Duration = Duration::from_millis(4000);

/// Bytes moved, or the libusb failure
pub type TransferResult = std::result::Result<usize, rusb::Error>;

/// Blocking bulk transfers over fixed endpoints
pub trait Transport {
    /// Write `data` to `endpoint`, returning the number of bytes accepted
    fn bulk_write(&mut self, endpoint: u8, data: &[u8], timeout: Duration) -> TransferResult;

    /// Read into `buf` from `endpoint`, returning the number of bytes received
    fn bulk_read(&mut self, endpoint: u8, buf: &mut [u8], timeout: Duration) -> TransferResult;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn bulk_write(&mut self, endpoint: u8, data: &[u8], timeout: Duration) -> TransferResult {
        (**self).bulk_write(endpoint, data, timeout)
    }

    fn bulk_read(&mut self, endpoint: u8, buf: &mut [u8], timeout: Duration) -> TransferResult {
        (**self).bulk_read(endpoint, buf, timeout)
    }
}
