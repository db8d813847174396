//! HTTP API gateway for the arithmetic expression calculator.
//!
//! Exposes `POST /api/v1/calculate` over the `calc-core` pipeline and maps
//! each evaluation error kind to a response status.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
