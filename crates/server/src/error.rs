use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use synapse::PipelineError;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Not found")]
    NotFound,
}

/// API error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Error followed by every `caused by` source, one per line.
    pub traceback: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Pipeline(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            ServerError::Pipeline(_) | ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Get error type string
    fn error_type(&self) -> &'static str {
        match self {
            ServerError::BadRequest(_) => "BadRequest",
            ServerError::Pipeline(err) => err.kind(),
            ServerError::Unavailable(_) => "ServiceUnavailable",
            ServerError::Internal(_) => "InternalError",
            ServerError::NotFound => "NotFound",
        }
    }

    fn traceback(&self) -> String {
        let mut lines = vec![format!("{}: {self}", self.error_type())];
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            lines.push(format!("caused by: {err}"));
            source = err.source();
        }
        lines.join("\n")
    }

    pub fn to_response_body(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            kind: self.error_type().to_string(),
            traceback: self.traceback(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = self.to_response_body();

        if status.is_server_error() {
            tracing::error!(status = %status, kind = %body.kind, error = %body.error, "request failed");
        } else {
            tracing::debug!(status = %status, kind = %body.kind, error = %body.error, "request rejected");
        }

        (status, Json(body)).into_response()
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        ServerError::BadRequest(format!("JSON parse error: {err}"))
    }
}

impl From<tokio::task::JoinError> for ServerError {
    fn from(err: tokio::task::JoinError) -> Self {
        ServerError::Internal(format!("worker task failed: {err}"))
    }
}
