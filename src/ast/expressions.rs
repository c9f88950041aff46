use std::fmt::Display;

/// Relational operators, allowed once per expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    LessThan,
    GreaterThan,
    EqualTo,
    NotEqualTo,
}

/// Operators of the additive tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOp {
    Plus,
    Minus,
    Or,
}

/// Operators of the multiplicative tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MulOp {
    Multiply,
    Divide,
    And,
}

impl Display for RelOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelOp::LessThan => write!(f, "<"),
            RelOp::GreaterThan => write!(f, ">"),
            RelOp::EqualTo => write!(f, "="),
            RelOp::NotEqualTo => write!(f, "<>"),
        }
    }
}

impl Display for AddOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddOp::Plus => write!(f, "+"),
            AddOp::Minus => write!(f, "-"),
            AddOp::Or => write!(f, "OR"),
        }
    }
}

impl Display for MulOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MulOp::Multiply => write!(f, "*"),
            MulOp::Divide => write!(f, "/"),
            MulOp::And => write!(f, "AND"),
        }
    }
}

/// `simple_exp [ relop simple_exp ]`
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub first: SimpleExpression,
    pub relation: Option<(RelOp, SimpleExpression)>,
}

/// `term { (+|-|OR) term }`
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleExpression {
    pub first: Term,
    pub rest: Vec<(AddOp, Term)>,
}

/// `factor { (*|/|AND) factor }`
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub first: Factor,
    pub rest: Vec<(MulOp, Factor)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Factor {
    FloatLiteral(f64),
    /// Integer literal, held as a float like every other value
    IntLiteral(f64),
    Identifier(String),
    /// Arithmetic negation, `- factor`
    Minus(Box<Factor>),
    /// Logical negation, `NOT factor`
    Not(Box<Factor>),
    /// `( expression )`
    Grouping(Box<Expression>),
}

impl From<Factor> for Term {
    fn from(factor: Factor) -> Self {
        Term { first: factor, rest: vec![] }
    }
}

impl From<Term> for SimpleExpression {
    fn from(term: Term) -> Self {
        SimpleExpression { first: term, rest: vec![] }
    }
}

impl From<SimpleExpression> for Expression {
    fn from(simple: SimpleExpression) -> Self {
        Expression { first: simple, relation: None }
    }
}

impl From<Factor> for Expression {
    fn from(factor: Factor) -> Self {
        Expression::from(SimpleExpression::from(Term::from(factor)))
    }
}
