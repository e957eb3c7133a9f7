//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use thermohub_domain::error::ThermoError;

/// JSON body shared by error responses and the health check.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Maps failures to an HTTP response with a `{"message": ...}` body.
///
/// `NotFound` becomes 404. Every other failure, malformed request bodies
/// included, becomes 500.
pub enum ApiError {
    Domain(ThermoError),
    Body(JsonRejection),
}

impl From<ThermoError> for ApiError {
    fn from(err: ThermoError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(err @ ThermoError::NotFound(_)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(err @ ThermoError::Validation(_)) => {
                tracing::warn!(error = %err, "rejected relay patch");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            Self::Domain(
                err @ (ThermoError::StorageUnavailable(_) | ThermoError::CorruptData(_)),
            ) => {
                tracing::error!(error = %err, "storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            Self::Body(rejection) => {
                tracing::warn!(status = %rejection.status(), "rejected request body");
                (StatusCode::INTERNAL_SERVER_ERROR, rejection.body_text())
            }
        };

        (status, Json(MessageBody { message })).into_response()
    }
}
