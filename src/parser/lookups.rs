use std::collections::HashMap;

use crate::{
    ast::{
        ast::Stmt,
        expressions::{AddOp, Factor, MulOp, RelOp},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    symbols::symbol_table::SymbolTable,
};

use super::{expr::*, parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser, &SymbolTable) -> Result<Stmt, Error>;
pub type FactorHandler = fn(&mut Parser, &SymbolTable) -> Result<Factor, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Statements
    parser.stmt(TokenKind::Begin, parse_compound_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::Read, parse_read_stmt);
    parser.stmt(TokenKind::Write, parse_write_stmt);
    parser.stmt(TokenKind::Identifier, parse_assignment_stmt);

    // Literals and symbols
    parser.factor(TokenKind::FloatLiteral, parse_number_factor);
    parser.factor(TokenKind::IntLiteral, parse_number_factor);
    parser.factor(TokenKind::Identifier, parse_identifier_factor);
    parser.factor(TokenKind::OpenParen, parse_grouping_factor);

    // Prefix
    parser.factor(TokenKind::Not, parse_not_factor);
    parser.factor(TokenKind::Minus, parse_minus_factor);
}

pub fn relational_operator(kind: TokenKind) -> Option<RelOp> {
    match kind {
        TokenKind::LessThan => Some(RelOp::LessThan),
        TokenKind::GreaterThan => Some(RelOp::GreaterThan),
        TokenKind::EqualTo => Some(RelOp::EqualTo),
        TokenKind::NotEqualTo => Some(RelOp::NotEqualTo),
        _ => None,
    }
}

pub fn additive_operator(kind: TokenKind) -> Option<AddOp> {
    match kind {
        TokenKind::Plus => Some(AddOp::Plus),
        TokenKind::Minus => Some(AddOp::Minus),
        TokenKind::Or => Some(AddOp::Or),
        _ => None,
    }
}

pub fn multiplicative_operator(kind: TokenKind) -> Option<MulOp> {
    match kind {
        TokenKind::Multiply => Some(MulOp::Multiply),
        TokenKind::Divide => Some(MulOp::Divide),
        TokenKind::And => Some(MulOp::And),
        _ => None,
    }
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type FactorLookup = HashMap<TokenKind, FactorHandler>;
