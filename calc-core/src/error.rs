use std::fmt;

use serde::{Deserialize, Serialize};

/// Errors produced while evaluating an expression.
///
/// Every variant describes malformed caller input. The offending literal or
/// character is carried as a field, separate from the [`ErrorKind`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum CalcError {
    /// The input was empty once whitespace was removed.
    #[error("empty expression")]
    EmptyExpression,

    /// A run of digits and decimal points did not parse as a float.
    #[error("invalid number '{literal}'")]
    InvalidNumber { literal: String },

    /// A character outside `[0-9.+\-*/()]` was found.
    #[error("unsupported character '{character}'")]
    UnsupportedCharacter { character: char },

    /// A `(` without a matching `)`, or the other way round.
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    /// An operator lacked operands, or operands were left over.
    #[error("malformed expression")]
    MalformedExpression,

    /// The right operand of `/` was exactly zero.
    #[error("division by zero")]
    DivisionByZero,
}

impl CalcError {
    /// Returns the discriminant of this error without its detail.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyExpression => ErrorKind::EmptyExpression,
            Self::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            Self::UnsupportedCharacter { .. } => ErrorKind::UnsupportedCharacter,
            Self::UnbalancedParentheses => ErrorKind::UnbalancedParentheses,
            Self::MalformedExpression => ErrorKind::MalformedExpression,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
        }
    }

    /// Returns `true` when the error was caused by the caller's input.
    ///
    /// All core errors are validation errors; anything else a transport
    /// observes is an internal failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        self.kind().is_validation()
    }
}

/// Fieldless discriminant of a [`CalcError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorKind {
    EmptyExpression,
    InvalidNumber,
    UnsupportedCharacter,
    UnbalancedParentheses,
    MalformedExpression,
    DivisionByZero,
}

impl ErrorKind {
    /// Stable `snake_case` name, identical to the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyExpression => "empty_expression",
            Self::InvalidNumber => "invalid_number",
            Self::UnsupportedCharacter => "unsupported_character",
            Self::UnbalancedParentheses => "unbalanced_parentheses",
            Self::MalformedExpression => "malformed_expression",
            Self::DivisionByZero => "division_by_zero",
        }
    }

    /// Returns `true` for kinds caused by caller input.
    #[must_use]
    pub const fn is_validation(self) -> bool {
        match self {
            Self::EmptyExpression
            | Self::InvalidNumber
            | Self::UnsupportedCharacter
            | Self::UnbalancedParentheses
            | Self::MalformedExpression
            | Self::DivisionByZero => true,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
