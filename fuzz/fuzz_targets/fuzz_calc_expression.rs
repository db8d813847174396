//! Fuzz target: full tokenize → postfix → evaluate pipeline.
//!
//! Arbitrary UTF-8 input must never panic, and a successful evaluation must
//! be reproducible.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(expr) = std::str::from_utf8(data) else {
        return;
    };

    let first = calc_core::calc(expr);
    let second = calc_core::calc(expr);
    match (first, second) {
        (Ok(a), Ok(b)) => assert_eq!(a.to_bits(), b.to_bits(), "evaluation must be deterministic"),
        (Err(a), Err(b)) => {
            assert_eq!(a, b, "errors must be deterministic");
            assert!(a.is_validation(), "core errors are always validation errors");
        }
        _ => panic!("outcome changed between runs"),
    }
});
