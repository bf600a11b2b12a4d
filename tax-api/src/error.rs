//! HTTP error mapping for the calculator API.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tax_core::TaxError;
use thiserror::Error;

/// Fixed message returned for every rejected request body.
pub const INVALID_PARAMETER_MESSAGE: &str = "Invalid parameter.";

/// Application layer errors, used by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid parameter")]
    InvalidParameter,
}

/// Error response body for JSON responses.
#[derive(Serialize)]
struct ErrorResponse {
    message: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidParameter => (StatusCode::BAD_REQUEST, INVALID_PARAMETER_MESSAGE),
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

impl From<TaxError> for ApiError {
    fn from(err: TaxError) -> Self {
        match err {
            TaxError::InvalidArgument => ApiError::InvalidParameter,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "rejected request body");
        ApiError::InvalidParameter
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::debug!(reason = %err, "request body failed validation");
        ApiError::InvalidParameter
    }
}
