//! Infix to postfix conversion (shunting-yard).

use crate::{error::CalcError, token::Token};

/// Reorders an infix token sequence into postfix order.
///
/// Operators of equal priority are emitted left to right. Parentheses are
/// consumed and never appear in the output.
///
/// # Errors
/// Returns [`CalcError::UnbalancedParentheses`] for a `)` with no open `(`
/// or a `(` still open at the end of input.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, CalcError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for &token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::LParen => stack.push(token),
            Token::RParen => loop {
                match stack.pop() {
                    Some(Token::LParen) => break,
                    Some(op) => output.push(op),
                    None => return Err(CalcError::UnbalancedParentheses),
                }
            },
            op => {
                debug_assert!(op.is_operator(), "remaining tokens are binary operators");
                while let Some(&top) = stack.last() {
                    if matches!(top, Token::LParen) || top.priority() < token.priority() {
                        break;
                    }
                    output.push(top);
                    stack.pop();
                }
                stack.push(token);
            }
        }
    }

    while let Some(op) = stack.pop() {
        if matches!(op, Token::LParen) {
            return Err(CalcError::UnbalancedParentheses);
        }
        output.push(op);
    }

    Ok(output)
}
