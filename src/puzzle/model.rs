use std::fmt;

use crate::puzzle::errors::PuzzleError;
use crate::puzzle::generator::GeneratorConfig;

/// Distinct in-range numbers handed to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    numbers: Vec<i64>,
}

impl Puzzle {
    /// Build a standard puzzle: four distinct numbers in 1..=13
    ///
    /// # Errors
    ///
    /// Returns an error if the count, range or distinctness rule is broken.
    pub fn new(numbers: Vec<i64>) -> Result<Self, PuzzleError> {
        Self::with_rules(numbers, &GeneratorConfig::default())
    }

    /// Build a puzzle checked against the size and range of `config`
    pub fn with_rules(numbers: Vec<i64>, config: &GeneratorConfig) -> Result<Self, PuzzleError> {
        if numbers.len() != config.size {
            return Err(PuzzleError::WrongSize {
                expected: config.size,
                actual: numbers.len(),
            });
        }

        for (index, &value) in numbers.iter().enumerate() {
            if value < config.min || value > config.max {
                return Err(PuzzleError::OutOfRange {
                    value,
                    min: config.min,
                    max: config.max,
                });
            }
            if numbers.iter().take(index).any(|&earlier| earlier == value) {
                return Err(PuzzleError::Duplicate(value));
            }
        }

        Ok(Self { numbers })
    }

    pub fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    pub fn into_numbers(self) -> Vec<i64> {
        self.numbers
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rendered: Vec<String> = self.numbers.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", rendered.join(" "))
    }
}
