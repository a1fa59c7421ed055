//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use scorecard_domain::error::ScorecardError;

/// JSON error envelope returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

/// Maps [`ScorecardError`] to an HTTP response with appropriate status code.
pub struct ApiError(ScorecardError);

impl From<ScorecardError> for ApiError {
    fn from(err: ScorecardError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ScorecardError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ScorecardError::Conflict(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ScorecardError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            ScorecardError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                success: false,
                error: message,
            }),
        )
            .into_response()
    }
}
