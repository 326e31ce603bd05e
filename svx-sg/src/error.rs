//! Error types for svx-sg
//!
//! Request handling distinguishes two failure classes: the caller supplied
//! no usable text (client error) and the synthesis capability failed
//! (server error). Both render as the same flat JSON body shape,
//! `{"error": "<message>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::synth::SynthesisError;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request carried no usable text (400)
    #[error("No text provided")]
    MissingInput,

    /// The synthesis capability reported failure (500); the message is the
    /// capability's, passed through verbatim
    #[error("{0}")]
    SynthesisFailure(#[from] SynthesisError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingInput => StatusCode::BAD_REQUEST,
            ApiError::SynthesisFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
