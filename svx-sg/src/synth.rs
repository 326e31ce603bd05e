//! Speech synthesis capability
//!
//! [`Synthesizer`] is the seam between HTTP request handling and the
//! actual text-to-speech engine. The production implementation forwards
//! text to a local engine over HTTP and writes the returned audio bytes
//! to the configured output path; tests substitute a scripted
//! implementation.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use thiserror::Error;
use tracing::{debug, info};

/// Failure reported by a synthesis capability.
///
/// Carries the capability's message untouched so callers can surface it
/// verbatim.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct SynthesisError(pub String);

/// Boxed future returned by [`Synthesizer`] methods
pub type SynthFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Text-to-speech capability
pub trait Synthesizer: Send + Sync {
    /// Synthesize `text` into an audio file at `output_path`.
    ///
    /// Returns the path the audio was written to.
    fn synthesize(
        &self,
        text: String,
        output_path: PathBuf,
    ) -> SynthFuture<Result<PathBuf, SynthesisError>>;
}

/// Synthesizer backed by a local TTS engine speaking HTTP.
///
/// Sends `{"text": ...}` to the engine endpoint and writes the response
/// body (WAV bytes) to the requested path. The previous file at that path
/// is overwritten.
pub struct HttpSynthesizer {
    client: reqwest::Client,
    engine_url: String,
}

impl HttpSynthesizer {
    pub fn new(engine_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            engine_url,
        }
    }
}

impl Synthesizer for HttpSynthesizer {
    fn synthesize(
        &self,
        text: String,
        output_path: PathBuf,
    ) -> SynthFuture<Result<PathBuf, SynthesisError>> {
        let client = self.client.clone();
        let engine_url = self.engine_url.clone();

        Box::pin(async move {
            debug!(engine_url = %engine_url, "Requesting synthesis");

            let response = client
                .post(&engine_url)
                .json(&serde_json::json!({ "text": text }))
                .send()
                .await
                .map_err(|e| SynthesisError(format!("Synthesis request failed: {}", e)))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(SynthesisError(format!(
                    "Synthesis engine returned {}: {}",
                    status, body
                )));
            }

            let audio = response
                .bytes()
                .await
                .map_err(|e| SynthesisError(format!("Failed to read audio data: {}", e)))?;

            tokio::fs::write(&output_path, &audio).await.map_err(|e| {
                SynthesisError(format!("Failed to write {}: {}", output_path.display(), e))
            })?;

            info!(
                "Wrote {} byte(s) of audio to {}",
                audio.len(),
                output_path.display()
            );
            Ok(output_path)
        })
    }
}
