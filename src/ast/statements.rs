use crate::Span;

use super::{ast::Stmt, expressions::Expression};

/// `BEGIN statement { ; statement } END`
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// What a WRITE prints: a declared variable's value or literal text.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOperand {
    Identifier(String),
    Literal(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WriteStmt {
    pub operand: WriteOperand,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadStmt {
    pub identifier: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub identifier: String,
    pub value: Expression,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expression,
    pub then_body: Box<Stmt>,
    pub else_body: Option<Box<Stmt>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expression,
    pub body: Box<Stmt>,
    pub span: Span,
}
