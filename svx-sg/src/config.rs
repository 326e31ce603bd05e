//! Gateway configuration
//!
//! Resolution follows the priority order: command-line argument (highest),
//! environment variable, TOML config file, compiled default. The first two
//! tiers are handled by clap's `env` support in `main.rs`; this module
//! merges the config file and defaults underneath them.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default port the gateway listens on
pub const DEFAULT_PORT: u16 = 5000;

/// Default path synthesized audio is written to
pub const DEFAULT_TTS_OUTPUT_PATH: &str = "output.wav";

/// Default endpoint of the local synthesis engine
pub const DEFAULT_ENGINE_URL: &str = "http://127.0.0.1:5002/api/tts";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {0}: {1}")]
    Read(PathBuf, String),

    #[error("cannot parse {0}: {1}")]
    Parse(PathBuf, String),
}

/// Speech Synthesis Gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Port the HTTP server binds on
    pub port: u16,
    /// Fixed path synthesized audio is written to; every request
    /// overwrites the previous file
    pub tts_output_path: PathBuf,
    /// Endpoint of the synthesis engine
    pub engine_url: String,
}

/// Optional TOML config file contents
///
/// Flat keys, e.g.:
/// ```toml
/// port = 5000
/// tts_output_path = "output.wav"
/// engine_url = "http://127.0.0.1:5002/api/tts"
/// ```
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    port: Option<u16>,
    tts_output_path: Option<PathBuf>,
    engine_url: Option<String>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e.to_string()))
    }
}

impl GatewayConfig {
    /// Merge CLI/env values (already resolved by clap) with the optional
    /// config file and the compiled defaults.
    pub fn resolve(
        port: Option<u16>,
        tts_output_path: Option<PathBuf>,
        engine_url: Option<String>,
        config_file: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let file = match config_file {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        Ok(Self {
            port: port.or(file.port).unwrap_or(DEFAULT_PORT),
            tts_output_path: tts_output_path
                .or(file.tts_output_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TTS_OUTPUT_PATH)),
            engine_url: engine_url
                .or(file.engine_url)
                .unwrap_or_else(|| DEFAULT_ENGINE_URL.to_string()),
        })
    }
}
