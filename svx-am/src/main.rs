//! svx-am (Asset Manifest) - Audio asset manifest generator
//!
//! Scans a flat directory of audio files and regenerates the TypeScript
//! manifest mapping playback ordinals to file imports. Run after adding,
//! removing, or renaming audio assets.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use svx_am::config::GeneratorConfig;

/// Audio asset manifest generator
#[derive(Parser, Debug)]
#[clap(name = "svx-am")]
#[clap(about = "Regenerate the audio asset manifest from a directory of audio files")]
struct Args {
    /// Directory to scan for audio files (top level only, no recursion)
    #[clap(long, value_name = "DIR", env = "SVX_AM_SOURCE_DIR")]
    source_dir: Option<PathBuf>,

    /// Manifest file to write (overwritten in full on every run)
    #[clap(long, value_name = "FILE", env = "SVX_AM_OUTPUT_PATH")]
    output_path: Option<PathBuf>,

    /// Optional TOML configuration file
    #[clap(long, value_name = "FILE", env = "SVX_AM_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting SVX Asset Manifest (svx-am) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let config =
        GeneratorConfig::resolve(args.source_dir, args.output_path, args.config.as_deref())
            .context("Failed to resolve configuration")?;

    info!(
        "Scanning {} for audio files",
        config.source_dir.display()
    );

    let summary = svx_am::generate(&config).context("Manifest generation failed")?;

    println!(
        "{} has been updated successfully.",
        summary.output_path.display()
    );

    Ok(())
}
