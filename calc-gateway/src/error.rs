//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use calc_core::CalcError;
use serde_json::json;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The expression was rejected by the evaluator.
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// The request body could not be decoded into an expression.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// The request body exceeded the configured limit.
    #[error("request body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },

    /// The evaluator produced a value that cannot be reported.
    #[error("non-finite result {0}")]
    NonFiniteResult(f64),
}

impl GatewayError {
    /// Stable `snake_case` label, or `None` for internal failures.
    #[must_use]
    pub fn kind(&self) -> Option<&'static str> {
        match self {
            GatewayError::Calc(e) if e.is_validation() => Some(e.kind().as_str()),
            GatewayError::Calc(_) | GatewayError::NonFiniteResult(_) => None,
            GatewayError::InvalidBody(_) => Some("invalid_body"),
            GatewayError::BodyTooLarge { .. } => Some("body_too_large"),
        }
    }

    /// HTTP status for this error: 422 for caller input, 500 otherwise.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        if self.kind().is_some() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self.kind() {
            Some(kind) => json!({"error": self.to_string(), "kind": kind}),
            None => json!({"error": "internal server error"}),
        };
        (status, Json(body)).into_response()
    }
}
