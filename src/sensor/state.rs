//! State, step and outcome types for the sensor state machine

use std::fmt;

/// Current phase of the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Resetting,
    Calibrating,
    PollingFinger,
    Streaming,
}

/// Individual transfer within a phase, used to label failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Init,
    InitResponse,
    Calibrate,
    CalibrationTable,
    FingerDetect,
    FingerDetectResponse,
    ImageCapture,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Step::Init => "init",
            Step::InitResponse => "init response",
            Step::Calibrate => "calibration",
            Step::CalibrationTable => "calibration table read",
            Step::FingerDetect => "finger detect setup",
            Step::FingerDetectResponse => "finger detect readback",
            Step::ImageCapture => "image capture setup",
        };
        f.write_str(s)
    }
}

/// Result of a best-effort cleanup write; never propagated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupOutcome {
    /// Device accepted every byte
    Sent,

    /// Write succeeded with the wrong byte count
    Short { expected: usize, actual: usize },

    /// Write failed
    Failed(rusb::Error),
}

impl CleanupOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, CleanupOutcome::Sent)
    }
}

/// Why the streaming loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A read failed (usually a timeout once the device stops sending)
    EndOfStream(rusb::Error),

    /// The cancellation token was raised
    Cancelled,
}

/// What a streaming run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSummary {
    /// Successful reads appended to the output
    pub buffers: usize,

    /// Total bytes appended to the output
    pub bytes: u64,

    pub stop: StopReason,

    /// Outcome of the reset-idle write sent after the loop
    pub cleanup: CleanupOutcome,
}
