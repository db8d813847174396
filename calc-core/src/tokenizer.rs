//! Converts expression text into a [`Token`] sequence.

use crate::{error::CalcError, token::Token};

/// Splits `expression` into number and symbol tokens in source order.
///
/// Whitespace is removed first. A leading `-` and every `(-` are rewritten
/// as subtraction from an implicit zero, so `-5` scans as `0-5` and `(-5)`
/// as `(0-5)`. A minus in any other unary position is left as is.
///
/// # Errors
/// - [`CalcError::EmptyExpression`] if nothing remains after stripping whitespace.
/// - [`CalcError::UnsupportedCharacter`] on the first character outside `[0-9.+\-*/()]`.
/// - [`CalcError::InvalidNumber`] if a digit run does not parse as a finite `f64`.
pub fn tokenize(expression: &str) -> Result<Vec<Token>, CalcError> {
    let stripped: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() {
        return Err(CalcError::EmptyExpression);
    }

    let normalized = rewrite_unary_minus(&stripped);

    let mut tokens = Vec::with_capacity(normalized.len());
    let mut literal = String::new();

    for c in normalized.chars() {
        if c.is_ascii_digit() || c == '.' {
            literal.push(c);
            continue;
        }
        let Some(symbol) = Token::from_symbol(c) else {
            return Err(CalcError::UnsupportedCharacter { character: c });
        };
        flush_literal(&mut literal, &mut tokens)?;
        tokens.push(symbol);
    }
    flush_literal(&mut literal, &mut tokens)?;

    Ok(tokens)
}

fn rewrite_unary_minus(expr: &str) -> String {
    let prefixed = if expr.starts_with('-') {
        format!("0{expr}")
    } else {
        expr.to_owned()
    };
    prefixed.replace("(-", "(0-")
}

fn flush_literal(literal: &mut String, tokens: &mut Vec<Token>) -> Result<(), CalcError> {
    if literal.is_empty() {
        return Ok(());
    }
    let value = literal
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CalcError::InvalidNumber { literal: literal.clone() })?;
    tokens.push(Token::Number(value));
    literal.clear();
    Ok(())
}
