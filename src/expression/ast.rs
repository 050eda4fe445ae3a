use num_rational::Ratio;

/// Exact value of an expression; division never rounds
pub type Value = Ratio<i64>;

/// The four binary operators of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// All operators, in search order
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

/// Arithmetic expression over exact numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Number(Value),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
    Neg(Box<Expression>),
}

impl Expression {
    pub fn number(n: i64) -> Self {
        Expression::Number(Value::from_integer(n))
    }

    pub fn binary(op: Operator, left: Expression, right: Expression) -> Self {
        let (l, r) = (Box::new(left), Box::new(right));
        match op {
            Operator::Add => Expression::Add(l, r),
            Operator::Sub => Expression::Sub(l, r),
            Operator::Mul => Expression::Mul(l, r),
            Operator::Div => Expression::Div(l, r),
        }
    }

    /// Operator at the root, `None` for numbers and negations
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Expression::Add(_, _) => Some(Operator::Add),
            Expression::Sub(_, _) => Some(Operator::Sub),
            Expression::Mul(_, _) => Some(Operator::Mul),
            Expression::Div(_, _) => Some(Operator::Div),
            Expression::Number(_) | Expression::Neg(_) => None,
        }
    }

    /// Numeric literals in left-to-right order
    pub fn operands(&self) -> Vec<Value> {
        fn collect(expr: &Expression, out: &mut Vec<Value>) {
            match expr {
                Expression::Number(n) => out.push(*n),
                Expression::Neg(e) => collect(e, out),
                Expression::Add(l, r)
                | Expression::Sub(l, r)
                | Expression::Mul(l, r)
                | Expression::Div(l, r) => {
                    collect(l, out);
                    collect(r, out);
                }
            }
        }

        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }

    /// Number of binary operators in the tree
    pub fn operator_count(&self) -> usize {
        match self {
            Expression::Number(_) => 0,
            Expression::Neg(e) => e.operator_count(),
            Expression::Add(l, r)
            | Expression::Sub(l, r)
            | Expression::Mul(l, r)
            | Expression::Div(l, r) => 1 + l.operator_count() + r.operator_count(),
        }
    }

    pub fn uses_negation(&self) -> bool {
        match self {
            Expression::Number(n) => *n < Value::from_integer(0),
            Expression::Neg(_) => true,
            Expression::Add(l, r)
            | Expression::Sub(l, r)
            | Expression::Mul(l, r)
            | Expression::Div(l, r) => l.uses_negation() || r.uses_negation(),
        }
    }
}
