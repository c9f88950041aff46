use crate::Span;

use super::statements::{
    AssignmentStmt, CompoundStmt, IfStmt, ReadStmt, WhileStmt, WriteStmt,
};

/// Root of the tree: `PROGRAM name; block`.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub name: String,
    pub block: Block,
    pub span: Span,
}

/// The declarations of a block only populate the symbol table, so the
/// node keeps just the statement part.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub compound: CompoundStmt,
}

/// Statement Types
///
/// Every statement kind the grammar allows, owning its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Compound(CompoundStmt),
    Write(WriteStmt),
    Read(ReadStmt),
    Assignment(AssignmentStmt),
    If(IfStmt),
    While(WhileStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Compound(stmt) => &stmt.span,
            Stmt::Write(stmt) => &stmt.span,
            Stmt::Read(stmt) => &stmt.span,
            Stmt::Assignment(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::While(stmt) => &stmt.span,
        }
    }
}
