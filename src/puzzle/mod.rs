//! Puzzle generation: random distinct cards, kept only when solvable

mod errors;
mod generator;
mod model;

pub use errors::PuzzleError;
pub use generator::{GeneratorConfig, PuzzleGenerator};
pub use model::Puzzle;

#[cfg(test)]
mod tests;
