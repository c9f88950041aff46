use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Called with the text a pattern matched at the current position.
pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order; the first pattern matching at the current position wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^\{[^}]*\}").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+(\.[0-9]+([eE][+-]?[0-9]+)?|[eE][+-]?[0-9]+)").unwrap(), handler: float_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+").unwrap(), handler: int_handler },
        RegexPattern { regex: Regex::new(r"^'[^'\n]*'").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r"^:=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign, ":=") },
        RegexPattern { regex: Regex::new(r"^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: Regex::new(r"^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new(r"^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new(r"^\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new(r"^\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new(r"^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-") },
        RegexPattern { regex: Regex::new(r"^\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Multiply, "*") },
        RegexPattern { regex: Regex::new(r"^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Divide, "/") },
        RegexPattern { regex: Regex::new(r"^<>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEqualTo, "<>") },
        RegexPattern { regex: Regex::new(r"^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessThan, "<") },
        RegexPattern { regex: Regex::new(r"^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterThan, ">") },
        RegexPattern { regex: Regex::new(r"^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::EqualTo, "=") },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            file: file_name,
        }
    }

    /// Moves past `n` bytes, counting any newlines they contain.
    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());
        self.line += self.source[self.pos..end].matches('\n').count() as u32;
        self.pos = end;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position::new(self.pos as u32, self.line, Rc::clone(&self.file))
    }

    /// Span of a single-line token of `len` bytes starting here.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position::new((self.pos + len) as u32, self.line, Rc::clone(&self.file)),
        }
    }

    fn unrecognised(&self) -> Error {
        let ch = self.at().unwrap_or('\0');
        let error = match ch {
            '{' => ErrorImpl::UnterminatedComment,
            '\'' => ErrorImpl::UnterminatedString,
            _ => ErrorImpl::UnrecognisedToken { token: ch.to_string() },
        };

        Error::with_lexeme(error, self.position(), ch.to_string())
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    let kind = RESERVED_LOOKUP
        .get(matched.to_ascii_uppercase().as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(kind, String::from(matched), span));
    lexer.advance_n(matched.len());
}

fn float_handler(lexer: &mut Lexer, matched: &str) {
    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::FloatLiteral, String::from(matched), span));
    lexer.advance_n(matched.len());
}

fn int_handler(lexer: &mut Lexer, matched: &str) {
    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::IntLiteral, String::from(matched), span));
    lexer.advance_n(matched.len());
}

fn string_handler(lexer: &mut Lexer, matched: &str) {
    // The pattern guarantees both quotes are present.
    let string_literal = &matched[1..matched.len() - 1];

    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::StringLiteral, String::from(string_literal), span));
    lexer.advance_n(matched.len());
}

/// Splits `source` into tokens, always ending with a single `EOF` token.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let found = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(lex.remainder())
                .map(|m| (pattern.handler, String::from(m.as_str())))
        });

        match found {
            Some((handler, matched)) => handler(&mut lex, &matched),
            None => return Err(lex.unrecognised()),
        }
    }

    let span = lex.span_of(0);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), span));
    Ok(lex.tokens)
}
