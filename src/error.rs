use std::time::Duration;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Failures of a single places provider call.
#[derive(Debug, thiserror::Error)]
pub enum PlacesError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider responded with HTTP {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("provider returned status {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Provider {
        status: String,
        message: Option<String>,
    },

    #[error("malformed provider payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failures of one ranking request, each terminal for that request.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("places search for '{keyword}' via {provider} failed: {source}")]
    Upstream {
        keyword: String,
        provider: &'static str,
        #[source]
        source: PlacesError,
    },

    #[error("places search did not complete within {}s", .0.as_secs_f64())]
    Timeout(Duration),
}

impl ResourceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ResourceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ResourceError::MissingConfiguration(_)
            | ResourceError::Upstream { .. }
            | ResourceError::Timeout(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(json!({ "detail": self.to_string() })),
        ).into_response()
    }
}
