//! Generator configuration
//!
//! Resolution follows the priority order: command-line argument (highest),
//! environment variable, TOML config file, compiled default. The first two
//! tiers are handled by clap's `env` support in `main.rs`; this module
//! merges the config file and defaults underneath them.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Default source directory scanned for audio files
pub const DEFAULT_SOURCE_DIR: &str = "./assets/audio";

/// Default manifest destination
pub const DEFAULT_OUTPUT_PATH: &str = "./audioFiles.ts";

/// Asset Manifest generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory where audio files are discovered
    pub source_dir: PathBuf,
    /// Manifest destination, fully overwritten each run
    pub output_path: PathBuf,
}

/// Optional TOML config file contents
///
/// Flat keys, e.g.:
/// ```toml
/// source_dir = "assets/audio"
/// output_path = "src/audioFiles.ts"
/// ```
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    source_dir: Option<PathBuf>,
    output_path: Option<PathBuf>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("cannot parse {}: {}", path.display(), e)))
    }
}

impl GeneratorConfig {
    /// Merge CLI/env values (already resolved by clap) with the optional
    /// config file and the compiled defaults.
    pub fn resolve(
        source_dir: Option<PathBuf>,
        output_path: Option<PathBuf>,
        config_file: Option<&Path>,
    ) -> Result<Self> {
        let file = match config_file {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        Ok(Self {
            source_dir: source_dir
                .or(file.source_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_DIR)),
            output_path: output_path
                .or(file.output_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
        })
    }
}
