use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Reserved words, keyed by their upper-case spelling.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("PROGRAM", TokenKind::Program);
        map.insert("VAR", TokenKind::Var);
        map.insert("BEGIN", TokenKind::Begin);
        map.insert("END", TokenKind::End);
        map.insert("IF", TokenKind::If);
        map.insert("THEN", TokenKind::Then);
        map.insert("ELSE", TokenKind::Else);
        map.insert("WHILE", TokenKind::While);
        map.insert("READ", TokenKind::Read);
        map.insert("WRITE", TokenKind::Write);
        map.insert("REAL", TokenKind::Real);
        map.insert("INTEGER", TokenKind::Integer);
        map.insert("AND", TokenKind::And);
        map.insert("OR", TokenKind::Or);
        map.insert("NOT", TokenKind::Not);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,
    IntLiteral,
    FloatLiteral,
    StringLiteral,

    OpenParen,
    CloseParen,

    Assign, // :=
    Colon,
    Semicolon,
    Comma,
    Dot,

    Plus,
    Minus,
    Multiply,
    Divide,

    LessThan,
    GreaterThan,
    EqualTo,
    NotEqualTo, // <>

    // Reserved
    Program,
    Var,
    Begin,
    End,
    If,
    Then,
    Else,
    While,
    Read,
    Write,
    Real,
    Integer,
    And,
    Or,
    Not,
}

impl TokenKind {
    /// The upper-case category name used in parse traces.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::IntLiteral => "INTLIT",
            TokenKind::FloatLiteral => "FLOATLIT",
            TokenKind::StringLiteral => "STRINGLIT",
            TokenKind::OpenParen => "OPENPAREN",
            TokenKind::CloseParen => "CLOSEPAREN",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::LessThan => "LESSTHAN",
            TokenKind::GreaterThan => "GREATERTHAN",
            TokenKind::EqualTo => "EQUALTO",
            TokenKind::NotEqualTo => "NOTEQUALTO",
            TokenKind::Program => "PROGRAM",
            TokenKind::Var => "VAR",
            TokenKind::Begin => "BEGIN",
            TokenKind::End => "END",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Read => "READ",
            TokenKind::Write => "WRITE",
            TokenKind::Real => "REAL",
            TokenKind::Integer => "INTEGER",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
