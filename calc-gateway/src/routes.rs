//! Axum route handlers for the calculator API.

use std::time::Instant;

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use calc_core::Calculator;
use http_body_util::{BodyExt, LengthLimitError, Limited};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::{config::GatewayConfig, error::GatewayError};

// ── Shared state ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct AppState {
    calculator: Calculator,
    max_body_bytes: usize,
}

impl AppState {
    #[must_use]
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            calculator: Calculator::new(),
            max_body_bytes: config.max_body_bytes.get(),
        }
    }
}

// ── Request / response types ──────────────────────────────────────────────────

/// JSON form of a calculate request.
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    pub expression: String,
}

/// Successful calculate response.
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub result: f64,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router for the given configuration.
pub fn create_router(config: &GatewayConfig) -> Router {
    Router::new()
        .route("/api/v1/calculate", post(calculate))
        .route("/health", get(health))
        .with_state(AppState::new(config))
        .layer(TraceLayer::new_for_http())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `POST /api/v1/calculate` — evaluate an arithmetic expression.
///
/// The body is `{"expression": "..."}` when sent as `application/json`,
/// otherwise the raw body text is taken as the expression.
///
/// # Errors
/// Returns [`GatewayError`] for undecodable or oversized bodies, rejected
/// expressions and non-finite results.
pub async fn calculate(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Body,
) -> Result<Json<CalculateResponse>, GatewayError> {
    let start = Instant::now();
    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, "calculate request received");

    let outcome = run_calculation(&state, &headers, body, request_id).await;

    match &outcome {
        Ok(result) => tracing::info!(
            %request_id,
            result,
            elapsed = ?start.elapsed(),
            "calculation succeeded"
        ),
        Err(e) if e.kind().is_some() => {
            tracing::warn!(
                %request_id,
                kind = e.kind().unwrap_or_default(),
                error = %e,
                "validation error"
            );
        }
        Err(e) => tracing::error!(%request_id, error = %e, "internal error"),
    }

    outcome.map(|result| Json(CalculateResponse { result }))
}

async fn run_calculation(
    state: &AppState,
    headers: &HeaderMap,
    body: Body,
    request_id: Uuid,
) -> Result<f64, GatewayError> {
    let bytes = read_body(body, state.max_body_bytes).await?;
    let expression = decode_expression(headers, &bytes)?;
    tracing::debug!(%request_id, %expression, "evaluating expression");

    let result = state.calculator.evaluate(&expression)?;
    if !result.is_finite() {
        return Err(GatewayError::NonFiniteResult(result));
    }
    Ok(result)
}

// ── Body helpers ──────────────────────────────────────────────────────────────

async fn read_body(body: Body, limit: usize) -> Result<Bytes, GatewayError> {
    Limited::new(body, limit)
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .map_err(|e| {
            if e.is::<LengthLimitError>() {
                GatewayError::BodyTooLarge { limit }
            } else {
                GatewayError::InvalidBody(format!("failed to read body: {e}"))
            }
        })
}

/// Extract the expression text from a request body.
///
/// # Errors
/// Returns [`GatewayError::InvalidBody`] if the body is not UTF-8, or is
/// declared JSON but does not match [`CalculateRequest`].
pub fn decode_expression(headers: &HeaderMap, bytes: &[u8]) -> Result<String, GatewayError> {
    if is_json(headers) {
        let request: CalculateRequest = serde_json::from_slice(bytes)
            .map_err(|e| GatewayError::InvalidBody(format!("malformed JSON: {e}")))?;
        return Ok(request.expression);
    }
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| GatewayError::InvalidBody(format!("body is not UTF-8: {e}")))
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, Method, Request};
    use tower::ServiceExt;

    fn test_config() -> GatewayConfig {
        GatewayConfig::default()
    }

    async fn send(
        app: Router,
        method: Method,
        uri: &str,
        content_type: Option<&str>,
        body: impl Into<Body>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        let req = match builder.body(body.into()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let resp = match app.oneshot(req).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        let status = resp.status();
        let bytes = match axum::body::to_bytes(resp.into_body(), 4096).await {
            Ok(b) => b,
            Err(e) => panic!("failed to read body: {e}"),
        };
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            match serde_json::from_slice(&bytes) {
                Ok(v) => v,
                Err(e) => panic!("invalid JSON: {e}"),
            }
        };
        (status, json)
    }

    async fn post_json(body: &str) -> (StatusCode, serde_json::Value) {
        let app = create_router(&test_config());
        send(app, Method::POST, "/api/v1/calculate", Some("application/json"), body.to_owned()).await
    }

    #[tokio::test]
    async fn health_response_format_returns_ok_with_status_field() {
        let app = create_router(&test_config());
        let (status, body) = send(app, Method::GET, "/health", None, Body::empty()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn json_expression_returns_result() {
        let (status, body) = post_json(r#"{"expression": "2 + 3 * 4"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], 14.0);
        assert!(body.get("error").is_none(), "result and error are exclusive");
    }

    #[tokio::test]
    async fn raw_text_expression_returns_result() {
        let app = create_router(&test_config());
        let (status, body) =
            send(app, Method::POST, "/api/v1/calculate", Some("text/plain"), "(-5+2)*2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], -6.0);
    }

    #[tokio::test]
    async fn validation_errors_return_422_with_kind() {
        let cases = [
            (r#"{"expression": "2/0"}"#, "division_by_zero"),
            (r#"{"expression": "2+"}"#, "malformed_expression"),
            (r#"{"expression": "(2+3"}"#, "unbalanced_parentheses"),
            (r#"{"expression": "   "}"#, "empty_expression"),
            (r#"{"expression": "2+a"}"#, "unsupported_character"),
            (r#"{"expression": "2..3+1"}"#, "invalid_number"),
        ];
        for (payload, kind) in cases {
            let (status, body) = post_json(payload).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "payload {payload}");
            assert_eq!(body["kind"], kind, "payload {payload}");
            assert!(body.get("result").is_none(), "result and error are exclusive");
        }
    }

    #[tokio::test]
    async fn malformed_json_returns_422() {
        let (status, body) = post_json(r#"{"expr": "1+1"}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["kind"], "invalid_body");
    }

    #[tokio::test]
    async fn non_utf8_body_returns_422() {
        let app = create_router(&test_config());
        let (status, body) =
            send(app, Method::POST, "/api/v1/calculate", None, vec![0xff_u8, 0xfe]).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["kind"], "invalid_body");
    }

    #[tokio::test]
    async fn oversized_body_returns_422() {
        let app = create_router(&test_config());
        let huge = "1+".repeat(4096) + "1";
        let (status, body) = send(app, Method::POST, "/api/v1/calculate", None, huge).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["kind"], "body_too_large");
    }

    #[tokio::test]
    async fn out_of_range_literal_returns_422() {
        let app = create_router(&test_config());
        let literal = format!("1{}", "0".repeat(400));
        let (status, body) = send(app, Method::POST, "/api/v1/calculate", None, literal).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["kind"], "invalid_number");
    }

    #[tokio::test]
    async fn arithmetic_overflow_returns_500() {
        let app = create_router(&test_config());
        let expr = format!("1{}*10", "0".repeat(308));
        let (status, body) = send(app, Method::POST, "/api/v1/calculate", None, expr).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal server error");
    }

    #[tokio::test]
    async fn get_on_calculate_is_method_not_allowed() {
        let app = create_router(&test_config());
        let (status, _) = send(app, Method::GET, "/api/v1/calculate", None, Body::empty()).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn json_content_type_detection_ignores_parameters_and_case() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("Application/JSON; charset=utf-8"),
        );
        let expr = match decode_expression(&headers, br#"{"expression":"1"}"#) {
            Ok(e) => e,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(expr, "1");
    }

    #[test]
    fn raw_body_is_taken_verbatim() {
        let expr = match decode_expression(&HeaderMap::new(), b" 1 + 1 ") {
            Ok(e) => e,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(expr, " 1 + 1 ");
    }

    #[test]
    fn calculate_response_serialization_has_only_result() {
        let json = match serde_json::to_string(&CalculateResponse { result: 2.5 }) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, r#"{"result":2.5}"#);
    }
}
