//! # aes2550
//!
//! Capture driver and frame extractor for the AuthenTec AES2550/AES2810
//! USB fingerprint sensor:
//! - Fixed register-write programs and opcodes encoded as single bulk writes
//! - Reset, calibration, finger-detect polling and image streaming
//! - Offline demultiplexing of the captured stream into 8x192 grayscale frames
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    aes2550-capture                           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Sensor (state machine)                      │
//! │     Idle → Calibrating → PollingFinger → Streaming → Idle    │
//! └──────────┬──────────────────────────────┬───────────────────┘
//!            │                              │
//!            ▼                              ▼
//!   ┌─────────────────┐            ┌─────────────────┐
//!   │     Command     │            │    Transport    │
//!   │  (programs,     │            │  (bulk in/out,  │
//!   │   opcodes)      │            │   4000 ms)      │
//!   └─────────────────┘            └────────┬────────┘
//!                                           │
//!                                           ▼
//!                                   finger.dump (raw)
//!                                           │
//! ┌─────────────────────────────────────────▼───────────────────┐
//! │             aes2550-extract → FrameReader → PGM              │
//! └─────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod transport;
pub mod command;
pub mod sensor;
pub mod frame;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{SensorError, Result};
pub use config::Config;
pub use sensor::{CancelToken, Sensor};
pub use frame::Extractor;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the aes2550 tools
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
