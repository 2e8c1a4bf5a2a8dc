use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pagecheck_pipeline::CheckError;
use serde_json::json;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to HTTP clients. A failed check never produces a partial
/// verdict; it produces exactly one of these.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Classification failed: {0}")]
    Classification(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            ApiError::Fetch(_) | ApiError::Classification(_) => StatusCode::BAD_GATEWAY,
            ApiError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ApiError::InvalidUrl(_) => "INVALID_URL",
            ApiError::Fetch(_) => "FETCH_FAILED",
            ApiError::Classification(_) => "CLASSIFICATION_FAILED",
            ApiError::Authentication(_) => "AUTH_FAILED",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<CheckError> for ApiError {
    fn from(err: CheckError) -> Self {
        match err {
            CheckError::InvalidUrl(m) => ApiError::InvalidUrl(m),
            CheckError::Fetch(m) => ApiError::Fetch(m),
            CheckError::Classification(m) => ApiError::Classification(m),
            CheckError::Internal(m) => ApiError::Internal(m),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}
