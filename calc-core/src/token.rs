use std::fmt;

/// A lexical unit of an arithmetic expression.
///
/// Numbers carry their parsed value; every other variant is one of the six
/// recognised symbols.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A base-10 literal with at most one decimal point.
    Number(f64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl Token {
    /// Maps a symbol character to its token, or `None` for anything else.
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Star),
            '/' => Some(Self::Slash),
            '(' => Some(Self::LParen),
            ')' => Some(Self::RParen),
            _ => None,
        }
    }

    /// Binding strength: 2 for `*` and `/`, 1 for `+` and `-`, 0 otherwise.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Star | Self::Slash => 2,
            Self::Number(_) | Self::LParen | Self::RParen => 0,
        }
    }

    /// Returns `true` for the four binary operators.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Star | Self::Slash)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
        }
    }
}

/// Renders a token sequence with single spaces, e.g. `2 3 4 * +`.
#[cfg(test)]
pub(crate) fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
