//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use powerctl_domain::error::{PowerCtlError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, message: impl Into<Option<String>>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

/// Maps [`PowerCtlError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(PowerCtlError);

impl From<PowerCtlError> for ApiError {
    fn from(err: PowerCtlError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            PowerCtlError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, ErrorBody::new("Unauthorized", None::<String>))
            }
            PowerCtlError::Validation(ValidationError::MissingMac) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new(
                    "MAC address is required",
                    "Please provide the MAC address of the computer to wake up".to_string(),
                ),
            ),
            PowerCtlError::Validation(err @ ValidationError::InvalidMac(_)) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("Invalid MAC address", err.to_string()),
            ),
            PowerCtlError::Validation(err @ ValidationError::InvalidBroadcast(_)) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("Invalid broadcast address", err.to_string()),
            ),
            PowerCtlError::Upstream { operation, source } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new(operation.to_string(), source.to_string()),
            ),
        };

        (status, Json(body)).into_response()
    }
}
