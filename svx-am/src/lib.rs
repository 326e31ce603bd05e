//! svx-am: Audio Asset Manifest Generator
//!
//! Scans a flat directory for audio files, orders them by the number
//! embedded in each filename, and writes a TypeScript module mapping
//! sequential ordinals to imports of those files.
//!
//! The pipeline is deliberately small: [`scanner`] finds candidate files,
//! [`sequence`] orders them, [`manifest`] renders and writes the output.
//! [`generate`] runs the whole cycle from a resolved [`config::GeneratorConfig`].

pub mod config;
pub mod error;
pub mod manifest;
pub mod scanner;
pub mod sequence;

pub use error::{Error, Result};

use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::manifest::Manifest;

/// Outcome of a successful generation run
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    /// Number of audio files mapped into the manifest
    pub files_mapped: usize,
    /// Where the manifest was written
    pub output_path: PathBuf,
}

/// Run one scan / order / render / write cycle.
///
/// A missing or unreadable source directory yields an empty manifest, not
/// an error. A missing output parent directory fails with [`Error::Write`];
/// no directories are created.
pub fn generate(config: &GeneratorConfig) -> Result<GenerateSummary> {
    let files = scanner::scan_audio_files(&config.source_dir);
    let ordered = sequence::order_by_sequence(files);

    let manifest = Manifest::build(&ordered, &config.output_path);
    manifest.write_to(&config.output_path)?;

    tracing::info!(
        "Mapped {} audio file(s) into {}",
        manifest.len(),
        config.output_path.display()
    );

    Ok(GenerateSummary {
        files_mapped: manifest.len(),
        output_path: config.output_path.clone(),
    })
}
