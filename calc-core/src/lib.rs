//! Arithmetic expression evaluation.
//!
//! The pipeline is [`tokenize`] → [`to_postfix`] → [`evaluate`]. It supports
//! `+ - * /`, parentheses, decimal literals and a leading or
//! parenthesised unary minus. The first failing stage aborts the call.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod evaluator;
pub mod postfix;
pub mod token;
pub mod tokenizer;

pub use error::{CalcError, ErrorKind};
pub use evaluator::evaluate;
pub use postfix::to_postfix;
pub use token::Token;
pub use tokenizer::tokenize;

/// Evaluates `expression` and returns its value.
///
/// # Errors
/// Returns the first [`CalcError`] raised by any stage of the pipeline.
pub fn calc(expression: &str) -> Result<f64, CalcError> {
    let tokens = tokenize(expression)?;
    let postfix = to_postfix(&tokens)?;
    evaluate(&postfix)
}

/// Stateless handle onto [`calc`] for transports that hold an evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    /// Creates a calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates `expression`.
    ///
    /// # Errors
    /// See [`calc`].
    pub fn evaluate(self, expression: &str) -> Result<f64, CalcError> {
        calc(expression)
    }
}
