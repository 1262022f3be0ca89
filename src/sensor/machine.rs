//! Sensor state machine
//!
//! Sequences programs and reads over a transport, one phase at a time.

use std::io::Write;

use crate::command::{programs, Program};
use crate::error::{Result, SensorError};
use crate::transport::{Transport, BULK_TIMEOUT, EP_OUT};

use super::{CancelToken, CleanupOutcome, ResponseBuffer, State, Step, StopReason, StreamSummary};

/// Drives one AES2550 through reset, calibration, detection and capture
///
/// Single-threaded and blocking: every transfer waits up to the bulk
/// timeout. Any phase that fails sends a best-effort `SET_IDLE_MODE` and
/// leaves the sensor in [`State::Idle`] before the error is returned.
pub struct Sensor<T: Transport> {
    /// Bulk transport (owns the device handle when backed by libusb)
    transport: T,

    /// Current phase
    state: State,

    /// Reused target of every bulk read
    response: ResponseBuffer,
}

impl<T: Transport> Sensor<T> {
    /// Wrap a transport; the sensor starts idle
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: State::Idle,
            response: ResponseBuffer::new(),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    // =========================================================================
    // Phases
    // =========================================================================

    /// Run the full capture: calibrate, wait for a finger, stream the image
    ///
    /// `open_output` is only called once the device has accepted the image
    /// program, so a capture that fails or is cancelled earlier never
    /// touches the output. The writer is handed back with the summary.
    pub fn capture<W, F>(&mut self, open_output: F, cancel: &CancelToken) -> Result<(W, StreamSummary)>
    where
        W: Write,
        F: FnOnce() -> Result<W>,
    {
        self.reset_and_calibrate()?;
        self.wait_for_finger(cancel)?;
        self.guarded(|sensor| {
            sensor.start_streaming()?;
            let mut out = open_output()?;
            let summary = sensor.drain_stream(&mut out, cancel)?;
            Ok((out, summary))
        })
    }

    /// Master reset, initialisation and calibration
    ///
    /// Both responses are drained and discarded. Not cancellable.
    pub fn reset_and_calibrate(&mut self) -> Result<()> {
        self.guarded(|sensor| {
            sensor.state = State::Resetting;
            sensor.send(Step::Init, &programs::init())?;
            sensor.receive(Step::InitResponse)?;

            sensor.state = State::Calibrating;
            sensor.send(Step::Calibrate, &programs::calibrate())?;
            sensor.receive(Step::CalibrationTable)?;

            tracing::info!("Probed device successfully");
            Ok(())
        })
    }

    /// Poll finger detection until the sensor reports a finger
    ///
    /// Unbounded; the only way out without a finger is `cancel`, checked once
    /// per poll. Returns the number of polls issued.
    pub fn wait_for_finger(&mut self, cancel: &CancelToken) -> Result<usize> {
        self.guarded(|sensor| {
            sensor.state = State::PollingFinger;
            let program = programs::finger_detect();
            let mut polls = 0;

            loop {
                if cancel.is_cancelled() {
                    tracing::info!("Finger detection cancelled after {} polls", polls);
                    return Err(SensorError::Cancelled);
                }

                sensor.send(Step::FingerDetect, &program)?;
                sensor.receive(Step::FingerDetectResponse)?;
                polls += 1;

                tracing::trace!(
                    "Finger detect poll {}: status {:?}",
                    polls,
                    sensor.response.status()
                );

                if sensor.response.finger_present() {
                    tracing::info!("Finger detected after {} polls", polls);
                    return Ok(polls);
                }
            }
        })
    }

    /// Start image capture and append every received buffer to `out`
    ///
    /// The loop ends on the first failed read or when `cancel` is raised;
    /// neither is an error. The reset-idle write that follows is always sent
    /// and its outcome only reported in the summary.
    pub fn stream_image<W: Write>(&mut self, out: &mut W, cancel: &CancelToken) -> Result<StreamSummary> {
        self.guarded(|sensor| {
            sensor.start_streaming()?;
            sensor.drain_stream(out, cancel)
        })
    }

    /// Send `SET_IDLE_MODE`, ignoring whether the device took it
    pub fn set_idle(&mut self) -> CleanupOutcome {
        let outcome = self.cleanup(&programs::set_idle_mode());
        self.state = State::Idle;
        outcome
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Send the image program; the device starts streaming once it is accepted
    fn start_streaming(&mut self) -> Result<()> {
        self.state = State::Streaming;
        self.send(Step::ImageCapture, &programs::image_capture())?;
        tracing::info!("Waiting for image...");
        Ok(())
    }

    /// Read until end of stream or cancellation, then reset the device to idle
    fn drain_stream<W: Write>(&mut self, out: &mut W, cancel: &CancelToken) -> Result<StreamSummary> {
        let streamed = self.stream_loop(out, cancel);

        let cleanup = self.cleanup(&programs::idle_reset());
        if !cleanup.is_sent() {
            tracing::warn!("Reset-idle write after streaming failed: {:?}", cleanup);
        }
        self.state = State::Idle;

        let (buffers, bytes, stop) = streamed?;
        tracing::info!(
            "Streaming stopped ({:?}): {} buffers, {} bytes",
            stop,
            buffers,
            bytes
        );

        Ok(StreamSummary {
            buffers,
            bytes,
            stop,
            cleanup,
        })
    }

    fn stream_loop<W: Write>(
        &mut self,
        out: &mut W,
        cancel: &CancelToken,
    ) -> Result<(usize, u64, StopReason)> {
        let mut buffers = 0usize;
        let mut bytes = 0u64;

        loop {
            if cancel.is_cancelled() {
                return Ok((buffers, bytes, StopReason::Cancelled));
            }

            match self.response.fill(&mut self.transport) {
                Ok(n) => {
                    tracing::debug!("Got buffer of size {}", n);
                    out.write_all(self.response.as_slice())?;
                    buffers += 1;
                    bytes += n as u64;
                }
                Err(e) => {
                    tracing::debug!("Image read ended: {}", e);
                    return Ok((buffers, bytes, StopReason::EndOfStream(e)));
                }
            }
        }
    }

    /// Run a phase; on failure idle the device before returning the error
    fn guarded<R>(&mut self, phase: impl FnOnce(&mut Self) -> Result<R>) -> Result<R> {
        match phase(self) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!("Aborting {:?}: {}", self.state, e);
                let outcome = self.set_idle();
                if !outcome.is_sent() {
                    tracing::debug!("Idle-mode cleanup ignored: {:?}", outcome);
                }
                Err(e)
            }
        }
    }

    /// Write a program; anything but the exact encoded length is an error
    fn send(&mut self, step: Step, program: &Program) -> Result<()> {
        let bytes = program.encode();
        match self.transport.bulk_write(EP_OUT, &bytes, BULK_TIMEOUT) {
            Ok(n) if n == bytes.len() => Ok(()),
            Ok(actual) => Err(SensorError::ShortTransfer {
                step,
                expected: bytes.len(),
                actual,
            }),
            Err(source) => Err(SensorError::Transfer { step, source }),
        }
    }

    /// Read one response into the shared buffer
    fn receive(&mut self, step: Step) -> Result<usize> {
        self.response
            .fill(&mut self.transport)
            .map_err(|source| SensorError::Transfer { step, source })
    }

    fn cleanup(&mut self, program: &Program) -> CleanupOutcome {
        let bytes = program.encode();
        match self.transport.bulk_write(EP_OUT, &bytes, BULK_TIMEOUT) {
            Ok(n) if n == bytes.len() => CleanupOutcome::Sent,
            Ok(actual) => CleanupOutcome::Short {
                expected: bytes.len(),
                actual,
            },
            Err(e) => CleanupOutcome::Failed(e),
        }
    }
}
