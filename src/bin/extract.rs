//! AES2550 Extract Binary
//!
//! Splits a raw capture into `frame-NNNNN.pnm` grayscale images.

use std::path::PathBuf;

use clap::Parser;
use aes2550::{Config, Extractor};
use tracing_subscriber::{fmt, EnvFilter};

/// AES2550 frame extractor
#[derive(Parser, Debug)]
#[command(name = "aes2550-extract")]
#[command(about = "Decode image frames from an AES2550 capture file")]
#[command(version)]
struct Args {
    /// Capture file written by aes2550-capture
    capture: PathBuf,

    /// Directory for the decoded frames
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
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

    let config = Config::builder()
        .capture_path(&args.capture)
        .output_dir(&args.output_dir)
        .build();

    if let Err(e) = config.validate() {
        tracing::error!("{}", e);
        std::process::exit(1);
    }

    let extractor = Extractor::from_config(&config);
    match extractor.extract_file(&config.capture_path) {
        Ok(report) => {
            tracing::info!(
                "Wrote {} frames to {}",
                report.images.len(),
                extractor.output_dir().display()
            );
        }
        Err(e) => {
            tracing::error!("Failed to extract {}: {}", config.capture_path.display(), e);
            std::process::exit(1);
        }
    }
}
