use log::{debug, info, warn};
use rayon::prelude::*;

use crate::expression::{Expression, Operator, Value};
use crate::solver::constants::{PUZZLE_SIZE, TARGET};
use crate::solver::enumerate::{operator_sequences, permutations};
use crate::solver::errors::SolverError;
use crate::solver::shapes::{Shape, shapes};

/// Configuration for the answer search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub target: i64,
    pub operand_count: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            target: TARGET,
            operand_count: PUZZLE_SIZE,
        }
    }
}

/// Exhaustive search for an expression that combines every number exactly once
/// and hits the target.
///
/// Candidates are tried in a fixed order (orderings of the input, then
/// operator sequences, then tree shapes) and the first hit is returned, so the
/// same ordered input always yields the same expression.
pub struct ExpressionSolver {
    config: SolverConfig,
    shapes: Vec<Shape>,
    operators: Vec<Vec<Operator>>,
}

impl ExpressionSolver {
    /// Create a solver for the standard game: four numbers, target 24
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    pub fn with_config(config: SolverConfig) -> Self {
        let shapes = shapes(config.operand_count);
        let operators = operator_sequences(config.operand_count.saturating_sub(1));
        Self {
            config,
            shapes,
            operators,
        }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Number of candidates a full search evaluates (7680 for the standard game)
    pub fn candidate_count(&self) -> usize {
        let orderings: usize = (1..=self.config.operand_count).product();
        orderings * self.operators.len() * self.shapes.len()
    }

    /// Find an expression from the given numbers that evaluates to the target.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Expression))` - The first matching candidate in search order
    /// * `Ok(None)` - Every candidate was tried and none matched
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidInputCount`] if `numbers` does not hold
    /// exactly the configured number of operands; no search is attempted.
    pub fn find_expression(&self, numbers: &[i64]) -> Result<Option<Expression>, SolverError> {
        if numbers.len() != self.config.operand_count {
            warn!(
                "Expected {} numbers, got {}: {:?}",
                self.config.operand_count,
                numbers.len(),
                numbers
            );
            return Err(SolverError::InvalidInputCount {
                expected: self.config.operand_count,
                actual: numbers.len(),
            });
        }

        info!(
            "Searching {} candidates over {:?} for {}",
            self.candidate_count(),
            numbers,
            self.config.target
        );

        let target = Value::from_integer(self.config.target);
        let found = permutations(numbers)
            .par_iter()
            .find_map_first(|ordering| self.search_ordering(ordering, &target));

        match &found {
            Some(expr) => info!("Found expression: {}", expr),
            None => info!("No expression over {:?} reaches {}", numbers, self.config.target),
        }

        Ok(found)
    }

    /// Whether any candidate over `numbers` reaches the target
    pub fn is_solvable(&self, numbers: &[i64]) -> Result<bool, SolverError> {
        Ok(self.find_expression(numbers)?.is_some())
    }

    fn search_ordering(&self, ordering: &[i64], target: &Value) -> Option<Expression> {
        let operands: Vec<Value> = ordering.iter().map(|&n| Value::from_integer(n)).collect();

        for operators in &self.operators {
            for shape in &self.shapes {
                let Some(candidate) = shape.build(&operands, operators) else {
                    continue;
                };
                match candidate.evaluate() {
                    Ok(value) if value == *target => return Some(candidate),
                    Ok(_) => {}
                    Err(e) => debug!("Skipping candidate {}: {}", candidate, e),
                }
            }
        }

        None
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self::new()
    }
}
