use log::{debug, info};

use crate::checker::errors::CheckError;
use crate::expression::{Expression, Value};
use crate::solver::constants::TARGET;

/// Checks whether a player's expression reaches the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerChecker {
    target: i64,
}

impl AnswerChecker {
    pub fn new(target: i64) -> Self {
        Self { target }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// Parse and evaluate `input`, succeeding when it equals the target.
    ///
    /// Only the value is checked; which numbers appear is not.
    ///
    /// # Errors
    ///
    /// * [`CheckError::Rejected`] - the text is not a plain arithmetic expression
    /// * [`CheckError::Evaluation`] - division by zero or overflow
    /// * [`CheckError::WrongValue`] - the expression evaluates to something else
    pub fn check(&self, input: &str) -> Result<Expression, CheckError> {
        let expression = Expression::parse(input)?;
        self.check_value(input, expression)
    }

    /// Like [`AnswerChecker::check`], but the expression must also use exactly
    /// the puzzle's numbers, each once, without negation.
    pub fn check_for_puzzle(&self, input: &str, numbers: &[i64]) -> Result<Expression, CheckError> {
        let expression = Expression::parse(input)?;

        if expression.uses_negation() {
            return Err(CheckError::Negation);
        }

        let mut expected: Vec<Value> = numbers.iter().map(|&n| Value::from_integer(n)).collect();
        let mut found = expression.operands();
        expected.sort();
        found.sort();
        if expected != found {
            debug!("Operands {:?} do not match puzzle {:?}", found, numbers);
            return Err(CheckError::NumbersMismatch {
                expected: format_values(&expected),
                found: format_values(&found),
            });
        }

        self.check_value(input, expression)
    }

    fn check_value(&self, input: &str, expression: Expression) -> Result<Expression, CheckError> {
        let value = expression.evaluate()?;
        if value != Value::from_integer(self.target) {
            info!("Answer '{}' evaluates to {}", input.trim(), value);
            return Err(CheckError::WrongValue {
                expression: input.trim().to_string(),
                value,
                target: self.target,
            });
        }

        info!("Answer '{}' is correct", input.trim());
        Ok(expression)
    }
}

impl Default for AnswerChecker {
    fn default() -> Self {
        Self::new(TARGET)
    }
}

fn format_values(values: &[Value]) -> String {
    let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", rendered.join(", "))
}
