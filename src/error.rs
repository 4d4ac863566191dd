use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Catalog schema error: {0}")]
    Schema(String),

    #[error("Catalog read error: {0}")]
    Catalog(#[from] csv::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Model failures never reach here; what remains is server-side
        let status = StatusCode::INTERNAL_SERVER_ERROR;

        tracing::error!(error = %self, "Recommendation request failed");

        let body = Json(json!({
            "error": format!("Server error: {}", self)
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Failure reasons for a single call to the text-generation service.
///
/// Every variant is equally fatal to the call and sends the pipeline to the
/// fallback suggester; the distinction only survives into logs.
#[derive(thiserror::Error, Debug)]
pub enum GenerationError {
    #[error("API key missing or invalid")]
    Credential,

    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service returned {status}: {body}")]
    Service { status: u16, body: String },

    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

impl GenerationError {
    /// Short label used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::Credential => "config",
            GenerationError::Transport(_) => "transport",
            GenerationError::Service { .. } => "service",
            GenerationError::MalformedBody(_) => "malformed_body",
        }
    }
}
