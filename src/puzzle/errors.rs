use thiserror::Error;

use crate::solver::SolverError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PuzzleError {
    #[error("Invalid generator configuration: {0}")]
    InvalidConfig(String),
    #[error("A puzzle needs {expected} numbers, got {actual}")]
    WrongSize { expected: usize, actual: usize },
    #[error("Number {value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: i64, max: i64 },
    #[error("Number {0} appears more than once")]
    Duplicate(i64),
    #[error("No solvable puzzle found after {attempts} attempts")]
    GenerationExhausted { attempts: usize },
    #[error("Solver error: {0}")]
    SolverError(#[from] SolverError),
}
