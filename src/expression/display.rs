use std::fmt;

use num_traits::Signed;

use crate::expression::ast::{Expression, Operator, Value};

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Fully parenthesized form: every compound operand is wrapped, the root is not.
/// `((1 + 2) + 3) * 4`, `8 / (3 - (8 / 3))`
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn is_plain_number(value: &Value) -> bool {
            value.is_integer() && !value.is_negative()
        }

        fn write_number(f: &mut fmt::Formatter, value: &Value) -> fmt::Result {
            if value.is_integer() {
                write!(f, "{}", value.numer())
            } else {
                write!(f, "{} / {}", value.numer(), value.denom())
            }
        }

        fn write_operand(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Number(n) if is_plain_number(n) => write_number(f, n),
                _ => {
                    write!(f, "(")?;
                    fmt_expression(f, expr)?;
                    write!(f, ")")
                }
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Number(n) => write_number(f, n),
                Expression::Neg(e) => {
                    write!(f, "-")?;
                    write_operand(f, e)
                }
                Expression::Add(l, r)
                | Expression::Sub(l, r)
                | Expression::Mul(l, r)
                | Expression::Div(l, r) => {
                    write_operand(f, l)?;
                    if let Some(op) = expr.operator() {
                        write!(f, " {} ", op)?;
                    }
                    write_operand(f, r)
                }
            }
        }

        fmt_expression(f, self)
    }
}
