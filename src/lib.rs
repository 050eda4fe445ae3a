//! Twentyfour - generate, solve and check "24-point" puzzles
//!
//! Four numbers must be combined with `+ - * /` and parentheses, each used
//! exactly once, to make 24. The crate offers the three operations a game
//! front end needs: deal a solvable puzzle, find a witness expression, and
//! check a player's answer. All arithmetic is exact.

pub mod checker;
pub mod expression;
pub mod puzzle;
pub mod solver;

// Re-export the main public API
pub use checker::{AnswerChecker, CheckError};
pub use expression::{Expression, ExpressionError, Operator, Value};
pub use puzzle::{GeneratorConfig, Puzzle, PuzzleError, PuzzleGenerator};
pub use solver::{ExpressionSolver, SolverConfig, SolverError};

/// Deal four distinct numbers in 1..=13 that have at least one solution
///
/// # Errors
///
/// Returns [`PuzzleError::GenerationExhausted`] in the unlikely case that no
/// solvable draw turns up within the attempt limit.
pub fn generate_puzzle() -> Result<Puzzle, PuzzleError> {
    PuzzleGenerator::new().generate(&mut rand::thread_rng())
}

/// Find an expression over exactly four numbers that evaluates to 24
///
/// # Returns
///
/// * `Ok(Some(Expression))` - The first solution in search order
/// * `Ok(None)` - The numbers cannot make 24
///
/// # Errors
///
/// Returns [`SolverError::InvalidInputCount`] unless exactly four numbers are given.
///
/// # Examples
///
/// ```
/// use twentyfour::solve;
///
/// match solve(&[4, 1, 8, 7]) {
///     Ok(Some(expr)) => assert_eq!(expr.to_string(), "(4 * (1 + 7)) - 8"),
///     Ok(None) => println!("No solution"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(numbers: &[i64]) -> Result<Option<Expression>, SolverError> {
    ExpressionSolver::new().find_expression(numbers)
}

/// Check that a player's expression evaluates to 24
///
/// # Errors
///
/// Returns a [`CheckError`] describing why the answer is not accepted: text
/// outside the arithmetic grammar, a failed evaluation, or the wrong value.
///
/// # Examples
///
/// ```
/// use twentyfour::check_answer;
///
/// assert!(check_answer("(8 - 4) * (7 - 1)").is_ok());
/// assert!(check_answer("(6 * 4) + 1").is_err());
/// ```
pub fn check_answer(expression: &str) -> Result<Expression, CheckError> {
    AnswerChecker::default().check(expression)
}
