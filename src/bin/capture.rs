//! AES2550 Capture Binary
//!
//! Calibrates the sensor, waits for a finger and streams the raw image data
//! to a capture file until the device stops sending or the process is
//! interrupted.
//!
//! The capture file is created only once the sensor has accepted the image
//! program, so a failed or cancelled run leaves an existing file untouched.
//!
//! SIGINT, SIGTERM and SIGHUP stop the capture cleanly. SIGQUIT is not
//! trapped: `ctrlc` has no hook for it, so Ctrl-\ kills the process without
//! sending the reset-idle program.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use aes2550::transport::UsbTransport;
use aes2550::{CancelToken, Config, Result, Sensor, SensorError};
use tracing_subscriber::{fmt, EnvFilter};

/// AES2550 capture driver
#[derive(Parser, Debug)]
#[command(name = "aes2550-capture")]
#[command(about = "Stream raw fingerprint data from an AES2550/AES2810 sensor")]
#[command(version)]
struct Args {
    /// Raw capture file
    #[arg(short, long, default_value = "finger.dump")]
    output: PathBuf,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,aes2550=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args = Args::parse();

    tracing::info!("aes2550-capture v{}", aes2550::VERSION);

    let config = Config::builder().capture_path(args.output).build();

    if let Err(e) = run(&config) {
        tracing::error!("Capture failed: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    config.validate()?;

    // Set up SIGINT/SIGTERM/SIGHUP handler (SIGQUIT keeps its default action)
    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || {
        tracing::info!("Received termination signal, stopping capture...");
        handler_token.cancel();
    })
    .map_err(|e| SensorError::Config(format!("failed to install signal handler: {}", e)))?;

    let transport = UsbTransport::open(config)?;
    let mut sensor = Sensor::new(transport);

    let (mut out, summary) = sensor.capture(
        || {
            tracing::info!("Capture file: {}", config.capture_path.display());
            Ok(BufWriter::new(File::create(&config.capture_path)?))
        },
        &cancel,
    )?;
    out.flush()?;

    tracing::info!(
        "Captured {} bytes in {} buffers ({:?})",
        summary.bytes,
        summary.buffers,
        summary.stop
    );

    Ok(())
}
