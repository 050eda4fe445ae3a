pub mod constants;
mod enumerate;
mod errors;
mod search;
mod shapes;

pub use enumerate::{operator_sequences, permutations};
pub use errors::SolverError;
pub use search::{ExpressionSolver, SolverConfig};
pub use shapes::{Shape, shapes};
