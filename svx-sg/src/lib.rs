//! svx-sg: Speech Synthesis Gateway
//!
//! Thin HTTP facade over a text-to-speech capability. POST /tts validates
//! the request, delegates to the configured [`synth::Synthesizer`], and
//! reports where the audio was written. GET /health serves liveness
//! checks. All responses are JSON.

use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;

pub mod api;
pub mod config;
pub mod error;
pub mod synth;

use synth::Synthesizer;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The synthesis capability behind POST /tts
    pub synthesizer: Arc<dyn Synthesizer>,
    /// Fixed path synthesized audio is written to; each request overwrites it
    pub tts_output_path: PathBuf,
}

impl AppState {
    /// Create new application state
    pub fn new(synthesizer: Arc<dyn Synthesizer>, tts_output_path: PathBuf) -> Self {
        Self {
            synthesizer,
            tts_output_path,
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/tts", post(api::synthesize))
        .merge(api::health_routes())
        .with_state(state)
        // Enable CORS for local access
        .layer(CorsLayer::permissive())
}
