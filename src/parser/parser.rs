//! Parser state and the `parse` entry point.
//!
//! The [`Parser`] owns the token stream and exactly one token of
//! lookahead. Productions inspect the lookahead, consume it with
//! [`Parser::advance`] or [`Parser::expect`], and dispatch statements and
//! factors through the lookup tables registered in
//! [`create_token_lookups`].
//!
//! When tracing is enabled every consumed token and every production entry
//! and exit is recorded, indented by nesting depth.

use std::{collections::HashMap, mem, rc::Rc};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl, SyntaxCode},
    lexer::tokens::{Token, TokenKind},
    symbols::symbol_table::SymbolTable,
    Position, Span, MK_TOKEN,
};

use super::{
    decl::parse_program,
    lookups::{create_token_lookups, FactorHandler, FactorLookup, StmtHandler, StmtLookup},
};

const TRACE_INDENT: &str = "|  ";

pub struct Parser {
    /// Tokens not yet looked at
    tokens: std::vec::IntoIter<Token>,
    /// The lookahead token
    current: Token,
    /// End of the most recently consumed token
    previous_end: Position,
    stmt_lookup: StmtLookup,
    factor_lookup: FactorLookup,
    /// Recorded trace lines, `None` when tracing is off
    trace: Option<Vec<String>>,
    level: usize,
}

impl Parser {
    /// Creates a parser positioned on the first token.
    ///
    /// An empty stream behaves as if it held a single `EOF` token.
    pub fn new(tokens: Vec<Token>, file: Rc<String>, trace: bool) -> Self {
        let mut tokens = tokens.into_iter();
        let current = tokens.next().unwrap_or_else(|| {
            let start = Position::new(0, 1, Rc::clone(&file));
            MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span {
                    start: start.clone(),
                    end: start,
                }
            )
        });

        Parser {
            tokens,
            previous_end: current.span.start.clone(),
            current,
            stmt_lookup: HashMap::new(),
            factor_lookup: HashMap::new(),
            trace: if trace { Some(vec![]) } else { None },
            level: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Consumes the lookahead and returns it.
    ///
    /// Once the stream is exhausted the trailing `EOF` token is repeated.
    pub fn advance(&mut self) -> Token {
        let next = match self.tokens.next() {
            Some(token) => token,
            None => self.current.clone(),
        };
        let token = mem::replace(&mut self.current, next);

        self.log(format!("found |{}| {}", token.value, token.kind.name()));
        self.previous_end = token.span.end.clone();
        token
    }

    /// Consumes the lookahead if it is `expected_kind`, otherwise fails with
    /// the syntax error `code`.
    pub fn expect(&mut self, expected_kind: TokenKind, code: SyntaxCode) -> Result<Token, Error> {
        if self.current.kind != expected_kind {
            Err(self.error(ErrorImpl::SyntaxError(code)))
        } else {
            Ok(self.advance())
        }
    }

    /// Builds an error located at the lookahead token.
    pub fn error(&self, error: ErrorImpl) -> Error {
        Error::with_lexeme(error, self.get_position(), self.current.value.clone())
    }

    /// Span from `start` to the end of the last consumed token.
    pub fn span_from(&self, start: Position) -> Span {
        Span {
            start,
            end: self.previous_end.clone(),
        }
    }

    /// Returns the statement handler registered for `kind`.
    pub fn get_stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    /// Returns the factor handler registered for `kind`.
    pub fn get_factor_handler(&self, kind: TokenKind) -> Option<FactorHandler> {
        self.factor_lookup.get(&kind).copied()
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a factor handler for a token.
    pub fn factor(&mut self, kind: TokenKind, factor_fn: FactorHandler) {
        self.factor_lookup.insert(kind, factor_fn);
    }

    /// Appends a line to the trace at the current depth.
    pub fn log(&mut self, line: impl AsRef<str>) {
        if let Some(trace) = self.trace.as_mut() {
            trace.push(format!("{}{}", TRACE_INDENT.repeat(self.level), line.as_ref()));
        }
    }

    /// Records entry into `production` and nests the following lines.
    pub fn enter(&mut self, production: &str) {
        self.log(format!("enter <{}>", production));
        self.level += 1;
    }

    pub fn exit(&mut self, production: &str) {
        self.level = self.level.saturating_sub(1);
        self.log(format!("exit <{}>", production));
    }

    /// Trace lines recorded so far; empty when tracing is off.
    pub fn trace_lines(&self) -> &[String] {
        self.trace.as_deref().unwrap_or(&[])
    }

    /// Returns the position of the lookahead token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }
}

/// Parses a whole program, declaring its variables into `symbols`.
///
/// The parser is returned alongside the result so callers can read the
/// trace even when parsing failed.
pub fn parse(
    tokens: Vec<Token>,
    file: Rc<String>,
    symbols: &mut SymbolTable,
    trace: bool,
) -> (Parser, Result<Program, Error>) {
    let mut parser = Parser::new(tokens, file, trace);
    create_token_lookups(&mut parser);

    let program = parse_program(&mut parser, symbols);
    (parser, program)
}
