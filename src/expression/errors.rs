use thiserror::Error;

/// Positions are character indices into the parsed text
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Arithmetic overflow")]
    Overflow,
    #[error("Expression is empty")]
    EmptyExpression,
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Unexpected token '{token}' at position {position}")]
    UnexpectedToken { token: String, position: usize },
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Unclosed parenthesis at position {position}")]
    UnbalancedParenthesis { position: usize },
    #[error("Expression nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },
}

impl ExpressionError {
    /// True for errors raised while reading the text, before any arithmetic
    pub fn is_syntax_error(&self) -> bool {
        !matches!(
            self,
            ExpressionError::DivisionByZero | ExpressionError::Overflow
        )
    }
}
