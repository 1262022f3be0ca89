//! Scripted in-memory transport
//!
//! Replays queued read responses and write outcomes, and records every write
//! so tests can assert on the exact bytes sent to the device.

use std::collections::VecDeque;
use std::time::Duration;

use crate::sensor::CancelToken;

use super::{TransferResult, Transport, EP_IN, EP_OUT};

/// How the mock answers the next bulk write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteBehavior {
    /// Accept every byte
    Full,

    /// Report success with this many bytes accepted
    Short(usize),

    /// Fail the transfer
    Fail(rusb::Error),
}

/// Transport double for exercising the sensor state machine
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Bytes of every write attempt, in order (including failed ones)
    writes: Vec<Vec<u8>>,

    /// Outcomes for upcoming writes; `Full` once exhausted
    write_script: VecDeque<WriteBehavior>,

    /// Responses for upcoming reads; `Timeout` once exhausted
    read_script: VecDeque<ScriptedRead>,

    /// Number of reads answered so far
    reads_served: usize,

    /// Raise `token` once `reads_served` reaches the given count
    cancel_after: Option<(usize, CancelToken)>,

    /// Endpoint misuse seen by the mock
    endpoint_errors: usize,
}

type ScriptedRead = std::result::Result<Vec<u8>, rusb::Error>;

impl MockTransport {
    /// Create a mock with empty scripts
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful read returning `data`
    pub fn push_read(&mut self, data: Vec<u8>) -> &mut Self {
        self.read_script.push_back(Ok(data));
        self
    }

    /// Queue a failing read
    pub fn push_read_error(&mut self, error: rusb::Error) -> &mut Self {
        self.read_script.push_back(Err(error));
        self
    }

    /// Queue the outcome of the next unscripted write
    pub fn push_write(&mut self, behavior: WriteBehavior) -> &mut Self {
        self.write_script.push_back(behavior);
        self
    }

    /// Raise `token` after `reads` reads have been answered
    pub fn cancel_after_reads(&mut self, reads: usize, token: CancelToken) -> &mut Self {
        self.cancel_after = Some((reads, token));
        self
    }

    /// All write attempts so far
    pub fn writes(&self) -> &[Vec<u8>] {
        &self.writes
    }

    /// Number of reads answered so far
    pub fn reads_served(&self) -> usize {
        self.reads_served
    }

    /// Reads still queued
    pub fn pending_reads(&self) -> usize {
        self.read_script.len()
    }

    /// Transfers issued on the wrong endpoint
    pub fn endpoint_errors(&self) -> usize {
        self.endpoint_errors
    }
}

impl Transport for MockTransport {
    fn bulk_write(&mut self, endpoint: u8, data: &[u8], _timeout: Duration) -> TransferResult {
        if endpoint != EP_OUT {
            self.endpoint_errors += 1;
            return Err(rusb::Error::InvalidParam);
        }
        self.writes.push(data.to_vec());

        match self.write_script.pop_front().unwrap_or(WriteBehavior::Full) {
            WriteBehavior::Full => Ok(data.len()),
            WriteBehavior::Short(n) => Ok(n),
            WriteBehavior::Fail(e) => Err(e),
        }
    }

    fn bulk_read(&mut self, endpoint: u8, buf: &mut [u8], _timeout: Duration) -> TransferResult {
        if endpoint != EP_IN {
            self.endpoint_errors += 1;
            return Err(rusb::Error::InvalidParam);
        }

        let response = self
            .read_script
            .pop_front()
            .unwrap_or(Err(rusb::Error::Timeout));
        self.reads_served += 1;

        if let Some((after, token)) = &self.cancel_after {
            if self.reads_served >= *after {
                token.cancel();
            }
        }

        let data = response?;
        let len = data.len().min(buf.len());
        buf[..len].copy_from_slice(&data[..len]);
        Ok(len)
    }
}
