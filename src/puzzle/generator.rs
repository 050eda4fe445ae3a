use log::{debug, info, warn};
use rand::Rng;
use rand::seq::index;

use crate::puzzle::errors::PuzzleError;
use crate::puzzle::model::Puzzle;
use crate::solver::constants::{MAX_CARD, MAX_GENERATION_ATTEMPTS, MIN_CARD, PUZZLE_SIZE, TARGET};
use crate::solver::{ExpressionSolver, SolverConfig};

/// Configuration for puzzle generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub size: usize,
    pub min: i64,
    pub max: i64,
    pub target: i64,
    /// Draws to try before giving up
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: PUZZLE_SIZE,
            min: MIN_CARD,
            max: MAX_CARD,
            target: TARGET,
            max_attempts: MAX_GENERATION_ATTEMPTS,
        }
    }
}

impl GeneratorConfig {
    /// # Errors
    ///
    /// Returns an error if the range is empty, too narrow for `size` distinct
    /// numbers, or `size`/`max_attempts` is zero.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.size == 0 {
            return Err(PuzzleError::InvalidConfig("size must be at least 1".to_string()));
        }
        if self.max_attempts == 0 {
            return Err(PuzzleError::InvalidConfig(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        if self.min > self.max {
            return Err(PuzzleError::InvalidConfig(format!(
                "min {} is greater than max {}",
                self.min, self.max
            )));
        }
        if self.range_len() < self.size {
            return Err(PuzzleError::InvalidConfig(format!(
                "range {}..={} holds fewer than {} distinct numbers",
                self.min, self.max, self.size
            )));
        }
        Ok(())
    }

    fn range_len(&self) -> usize {
        let width = self.max.saturating_sub(self.min).saturating_add(1);
        usize::try_from(width).unwrap_or(0)
    }
}

/// Generate-and-test loop: draw distinct numbers, keep the first solvable draw
pub struct PuzzleGenerator {
    config: GeneratorConfig,
    solver: ExpressionSolver,
}

impl PuzzleGenerator {
    /// Create a generator for the standard game
    pub fn new() -> Self {
        let config = GeneratorConfig::default();
        let solver = Self::solver_for(&config);
        Self { config, solver }
    }

    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidConfig`] if the configuration is rejected by
    /// [`GeneratorConfig::validate`].
    pub fn with_config(config: GeneratorConfig) -> Result<Self, PuzzleError> {
        config.validate()?;
        let solver = Self::solver_for(&config);
        Ok(Self { config, solver })
    }

    fn solver_for(config: &GeneratorConfig) -> ExpressionSolver {
        ExpressionSolver::with_config(SolverConfig {
            target: config.target,
            operand_count: config.size,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Draw `size` distinct numbers uniformly from the configured range
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<i64> {
        index::sample(rng, self.config.range_len(), self.config.size)
            .into_iter()
            .filter_map(|offset| i64::try_from(offset).ok())
            .map(|offset| self.config.min + offset)
            .collect()
    }

    /// Generate a puzzle that has at least one solution.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::GenerationExhausted`] if no solvable draw turns up
    /// within `max_attempts` draws.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Puzzle, PuzzleError> {
        for attempt in 1..=self.config.max_attempts {
            let numbers = self.draw(rng);
            if self.solver.is_solvable(&numbers)? {
                info!("Generated puzzle {:?} after {} attempt(s)", numbers, attempt);
                return Puzzle::with_rules(numbers, &self.config);
            }
            debug!("Draw {:?} has no solution, redrawing", numbers);
        }

        warn!(
            "No solvable puzzle after {} attempts",
            self.config.max_attempts
        );
        Err(PuzzleError::GenerationExhausted {
            attempts: self.config.max_attempts,
        })
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}
