//! Stack machine over postfix token sequences.

use crate::{error::CalcError, token::Token};

/// Computes the value of a postfix token sequence.
///
/// For each operator the two most recent values are popped as `b` then `a`
/// and `a op b` is pushed back.
///
/// # Errors
/// - [`CalcError::MalformedExpression`] if an operator finds fewer than two
///   values, a parenthesis is present, or the stack does not end with
///   exactly one value.
/// - [`CalcError::DivisionByZero`] if the right operand of `/` is zero.
pub fn evaluate(postfix: &[Token]) -> Result<f64, CalcError> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for &token in postfix {
        if let Token::Number(value) = token {
            stack.push(value);
            continue;
        }
        if !token.is_operator() {
            return Err(CalcError::MalformedExpression);
        }

        let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
            return Err(CalcError::MalformedExpression);
        };
        stack.push(apply(token, a, b)?);
    }

    match stack.as_slice() {
        [result] => Ok(*result),
        _ => Err(CalcError::MalformedExpression),
    }
}

fn apply(op: Token, a: f64, b: f64) -> Result<f64, CalcError> {
    match op {
        Token::Plus => Ok(a + b),
        Token::Minus => Ok(a - b),
        Token::Star => Ok(a * b),
        Token::Slash if b == 0.0 => Err(CalcError::DivisionByZero),
        Token::Slash => Ok(a / b),
        Token::Number(_) | Token::LParen | Token::RParen => Err(CalcError::MalformedExpression),
    }
}
