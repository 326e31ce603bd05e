//! Speech synthesis endpoint
//!
//! POST /tts takes `{"text": "..."}` and answers `{"audio_url": "..."}`
//! once the audio has been written. Anything short of a JSON body with a
//! non-empty `text` string is rejected up front; the synthesis capability
//! is only invoked for usable input.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// POST /tts request body
#[derive(Debug, Deserialize)]
pub struct TtsRequest {
    /// Text to synthesize; absent, null, and empty are all rejected
    #[serde(default)]
    pub text: Option<String>,
}

/// POST /tts success response
#[derive(Debug, Serialize)]
pub struct TtsResponse {
    /// Path of the audio file that was written
    pub audio_url: String,
}

/// POST /tts
///
/// The body extractor is optional: a missing or unparseable body arrives
/// here as `None` and folds into the same rejection as an absent or empty
/// `text` field.
pub async fn synthesize(
    State(state): State<AppState>,
    body: Option<Json<TtsRequest>>,
) -> ApiResult<Json<TtsResponse>> {
    let text = body
        .and_then(|Json(request)| request.text)
        .filter(|text| !text.is_empty())
        .ok_or(ApiError::MissingInput)?;

    debug!("Synthesis requested for {} character(s)", text.chars().count());

    let audio_path = state
        .synthesizer
        .synthesize(text, state.tts_output_path.clone())
        .await?;

    Ok(Json(TtsResponse {
        audio_url: audio_path.to_string_lossy().into_owned(),
    }))
}
