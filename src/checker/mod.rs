//! Validation of answers supplied as text

mod answer;
mod errors;

pub use answer::AnswerChecker;
pub use errors::CheckError;

#[cfg(test)]
mod tests;
