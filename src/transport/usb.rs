//! libusb transport
//!
//! Opens the sensor by its fixed vendor/product pair and holds interface 0
//! claimed until dropped.

use std::time::Duration;

use rusb::{Context, DeviceHandle, UsbContext};

use crate::config::Config;
use crate::error::{Result, SensorError};

use super::{TransferResult, Transport};

/// Bulk transport over a claimed libusb device handle
pub struct UsbTransport {
    /// Open device handle (closed on drop)
    handle: DeviceHandle<Context>,

    /// Claimed interface number
    interface: u8,

    /// Whether `interface` must be released on drop
    claimed: bool,
}

impl UsbTransport {
    /// Open the device named by `config` and claim its interface
    ///
    /// A missing device or an unclaimable interface is fatal for the run.
    pub fn open(config: &Config) -> Result<Self> {
        let context = Context::new()?;

        let handle = context
            .open_device_with_vid_pid(config.vendor_id, config.product_id)
            .ok_or(SensorError::DeviceNotFound {
                vendor_id: config.vendor_id,
                product_id: config.product_id,
            })?;

        let mut transport = Self {
            handle,
            interface: config.interface,
            claimed: false,
        };

        transport
            .handle
            .claim_interface(config.interface)
            .map_err(|source| SensorError::ClaimInterface {
                interface: config.interface,
                source,
            })?;
        transport.claimed = true;

        tracing::debug!(
            "Opened {:04x}:{:04x}, claimed interface {}",
            config.vendor_id,
            config.product_id,
            config.interface
        );

        Ok(transport)
    }
}

impl Transport for UsbTransport {
    fn bulk_write(&mut self, endpoint: u8, data: &[u8], timeout: Duration) -> TransferResult {
        self.handle.write_bulk(endpoint, data, timeout)
    }

    fn bulk_read(&mut self, endpoint: u8, buf: &mut [u8], timeout: Duration) -> TransferResult {
        self.handle.read_bulk(endpoint, buf, timeout)
    }
}

impl Drop for UsbTransport {
    fn drop(&mut self) {
        if self.claimed {
            if let Err(e) = self.handle.release_interface(self.interface) {
                tracing::debug!("Failed to release interface {}: {}", self.interface, e);
            }
        }
    }
}
