//! Sensor Module
//!
//! Protocol state machine driving the AES2550 over a [`Transport`].
//!
//! ## Phases
//! ```text
//!   Idle ──► Resetting ──► Calibrating ──► PollingFinger ──► Streaming ──► Idle
//!              │               │                 │               │
//!              └───────────────┴─────────────────┴───────────────┘
//!                        transfer failure: SET_IDLE_MODE, Idle
//! ```
//!
//! - Resetting/Calibrating: two programs, each followed by a discarded read
//! - PollingFinger: repeat detect program + read until `response[1] & 0x80`
//! - Streaming: image program, then append every read to the output until a
//!   read fails or the [`CancelToken`] is raised; always ends with a reset-idle
//!   register write whose outcome is only logged
//!
//! [`Transport`]: crate::transport::Transport

mod cancel;
mod response;
mod state;
mod machine;

pub use cancel::CancelToken;
pub use response::{ResponseBuffer, FINGER_PRESENT, RESPONSE_CAPACITY, STATUS_OFFSET};
pub use state::{CleanupOutcome, State, Step, StopReason, StreamSummary};
pub use machine::Sensor;
