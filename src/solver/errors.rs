use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Expected {expected} numbers, got {actual}")]
    InvalidInputCount { expected: usize, actual: usize },
}
