use log::debug;
use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};

use crate::expression::ast::{Expression, Operator, Value};
use crate::expression::errors::ExpressionError;

/// Scratch type for a single operation. Operands are bounded by `i64`, so
/// no intermediate product or sum reaches `i128::MIN`.
type Wide = Ratio<i128>;

fn widen(value: &Value) -> Wide {
    Wide::new_raw(i128::from(*value.numer()), i128::from(*value.denom()))
}

/// Narrow back to `Value`, rejecting anything with an `i64::MIN` component;
/// num-integer's gcd and sign normalization negate those and overflow.
fn narrow(wide: &Wide) -> Result<Value, ExpressionError> {
    let numer = i64::try_from(*wide.numer())
        .ok()
        .filter(|n| *n != i64::MIN);
    let denom = i64::try_from(*wide.denom()).ok().filter(|d| *d > 0);
    match (numer, denom) {
        (Some(numer), Some(denom)) => Ok(Value::new_raw(numer, denom)),
        _ => Err(ExpressionError::Overflow),
    }
}

fn apply(op: Operator, left: &Value, right: &Value) -> Result<Value, ExpressionError> {
    let (l, r) = (widen(left), widen(right));
    let result = match op {
        Operator::Add => l.checked_add(&r),
        Operator::Sub => l.checked_sub(&r),
        Operator::Mul => l.checked_mul(&r),
        Operator::Div => {
            if r.is_zero() {
                debug!("Division by zero attempted: {} / {}", left, right);
                return Err(ExpressionError::DivisionByZero);
            }
            l.checked_div(&r)
        }
    };
    result
        .as_ref()
        .ok_or(ExpressionError::Overflow)
        .and_then(narrow)
}

impl Expression {
    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division by zero
    /// - An operation whose exact result does not fit in 64-bit numerator/denominator
    ///   (`i64::MIN` included, as a literal or an intermediate)
    pub fn evaluate(&self) -> Result<Value, ExpressionError> {
        match self {
            Expression::Number(n) => narrow(&widen(n)),
            Expression::Add(l, r) => apply(Operator::Add, &l.evaluate()?, &r.evaluate()?),
            Expression::Sub(l, r) => apply(Operator::Sub, &l.evaluate()?, &r.evaluate()?),
            Expression::Mul(l, r) => apply(Operator::Mul, &l.evaluate()?, &r.evaluate()?),
            Expression::Div(l, r) => apply(Operator::Div, &l.evaluate()?, &r.evaluate()?),
            Expression::Neg(e) => {
                let value = e.evaluate()?;
                apply(Operator::Sub, &Value::zero(), &value)
            }
        }
    }
}
