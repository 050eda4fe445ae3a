//! Arithmetic expressions: exact evaluation, canonical display and a
//! restricted parser for caller-supplied answers

mod ast;
mod display;
mod errors;
mod eval;
mod parser;

pub use ast::{Expression, Operator, Value};
pub use errors::ExpressionError;
pub use parser::MAX_NESTING_DEPTH;
