use crate::expression::{Expression, Operator, Value};

/// Shape of a binary expression tree with unlabeled leaves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Leaf,
    Node(Box<Shape>, Box<Shape>),
}

impl Shape {
    pub fn leaves(&self) -> usize {
        match self {
            Shape::Leaf => 1,
            Shape::Node(l, r) => l.leaves() + r.leaves(),
        }
    }

    /// Fill the shape with operands and operators in left-to-right textual order.
    ///
    /// Returns `None` unless exactly `leaves()` operands and `leaves() - 1`
    /// operators are supplied.
    pub fn build(&self, operands: &[Value], operators: &[Operator]) -> Option<Expression> {
        fn fill<'a, 'b>(
            shape: &Shape,
            operands: &mut impl Iterator<Item = &'a Value>,
            operators: &mut impl Iterator<Item = &'b Operator>,
        ) -> Option<Expression> {
            match shape {
                Shape::Leaf => operands.next().map(|n| Expression::Number(*n)),
                Shape::Node(l, r) => {
                    let left = fill(l, operands, operators)?;
                    let op = *operators.next()?;
                    let right = fill(r, operands, operators)?;
                    Some(Expression::binary(op, left, right))
                }
            }
        }

        if operands.len() != self.leaves() || operators.len() + 1 != operands.len() {
            return None;
        }

        let mut operand_iter = operands.iter();
        let mut operator_iter = operators.iter();
        fill(self, &mut operand_iter, &mut operator_iter)
    }
}

/// All tree shapes with `leaves` leaves (Catalan many).
///
/// Shapes are ordered by decreasing size of the left subtree, so for four
/// leaves: `((a∘b)∘c)∘d`, `(a∘(b∘c))∘d`, `(a∘b)∘(c∘d)`, `a∘((b∘c)∘d)`,
/// `a∘(b∘(c∘d))`.
pub fn shapes(leaves: usize) -> Vec<Shape> {
    match leaves {
        0 => Vec::new(),
        1 => vec![Shape::Leaf],
        n => {
            let mut result = Vec::new();
            for left_leaves in (1..n).rev() {
                let right_shapes = shapes(n - left_leaves);
                for left in shapes(left_leaves) {
                    for right in &right_shapes {
                        result.push(Shape::Node(Box::new(left.clone()), Box::new(right.clone())));
                    }
                }
            }
            result
        }
    }
}
