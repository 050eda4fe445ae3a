use thiserror::Error;

use crate::expression::{ExpressionError, Value};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckError {
    #[error("Rejected expression: {0}")]
    Rejected(ExpressionError),
    #[error("Evaluation failed: {0}")]
    Evaluation(ExpressionError),
    #[error("Expression {expression} evaluates to {value}, not {target}")]
    WrongValue {
        expression: String,
        value: Value,
        target: i64,
    },
    #[error("Expression uses numbers {found}, expected {expected}")]
    NumbersMismatch { expected: String, found: String },
    #[error("Negative numbers are not allowed in an answer")]
    Negation,
}

impl From<ExpressionError> for CheckError {
    fn from(err: ExpressionError) -> Self {
        if err.is_syntax_error() {
            CheckError::Rejected(err)
        } else {
            CheckError::Evaluation(err)
        }
    }
}
