//! Fuzz target: request body decoding for `POST /api/v1/calculate`.
//!
//! Arbitrary bytes, sent either as JSON or as raw text, must decode to an
//! expression or a body error, never a panic.

#![no_main]

use axum::http::{header, HeaderMap, HeaderValue};
use calc_gateway::routes::decode_expression;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = decode_expression(&HeaderMap::new(), data);

    let mut json = HeaderMap::new();
    json.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Ok(expr) = decode_expression(&json, data) {
        let _ = calc_core::calc(&expr);
    }
});
