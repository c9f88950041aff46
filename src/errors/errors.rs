use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A fatal error, tagged with where it happened and the text found there.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    lexeme: Option<String>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            lexeme: None,
        }
    }

    pub fn with_lexeme(error_impl: ErrorImpl, position: Position, lexeme: impl Into<String>) -> Self {
        Error {
            internal_error: error_impl,
            position,
            lexeme: Some(lexeme.into()),
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_lexeme(&self) -> Option<&str> {
        self.lexeme.as_deref()
    }

    pub fn get_internal(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The numeric diagnostic code, for the kinds that have one.
    pub fn code(&self) -> Option<u16> {
        match &self.internal_error {
            ErrorImpl::SyntaxError(code) => Some(code.code()),
            ErrorImpl::DuplicateDeclaration { .. } => Some(101),
            ErrorImpl::UndeclaredIdentifier { .. } => Some(104),
            _ => None,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::SyntaxError(_) => "SyntaxError",
            ErrorImpl::DuplicateDeclaration { .. } => "DuplicateDeclaration",
            ErrorImpl::UndeclaredIdentifier { .. } => "UndeclaredIdentifier",
            ErrorImpl::TrailingInput { .. } => "TrailingInput",
            ErrorImpl::InvalidInput { .. } => "InvalidInput",
            ErrorImpl::EndOfInput => "EndOfInput",
            ErrorImpl::Io { .. } => "Io",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Comments opened with `{` must be closed with `}`"))
            }
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "String literals must be closed with `'` on the same line",
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::SyntaxError(SyntaxCode::StatementExpected) => ErrorTip::Suggestion(
                String::from("Statements start with BEGIN, IF, WHILE, READ, WRITE or an identifier"),
            ),
            ErrorImpl::SyntaxError(_) => ErrorTip::None,
            ErrorImpl::DuplicateDeclaration { name } => {
                ErrorTip::Suggestion(format!("Identifier `{}` already declared", name))
            }
            ErrorImpl::UndeclaredIdentifier { name } => ErrorTip::Suggestion(format!(
                "Identifier `{}` must be declared in the VAR section",
                name
            )),
            ErrorImpl::TrailingInput { token } => ErrorTip::Suggestion(format!(
                "Unexpected `{}` after the final END",
                token
            )),
            ErrorImpl::InvalidInput { token } => {
                ErrorTip::Suggestion(format!("READ expects a number, received `{}`", token))
            }
            ErrorImpl::EndOfInput => {
                ErrorTip::Suggestion(String::from("READ found no more input"))
            }
            ErrorImpl::Io { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.internal_error {
            ErrorImpl::SyntaxError(_) => write!(f, "{}", self.internal_error),
            other => match self.code() {
                Some(code) => write!(f, "{}: {}", code, other),
                None => write!(f, "{}", other),
            },
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Fixed catalog of "expected construct" diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxCode {
    IdentifierExpected,
    ProgramExpected,
    CloseParenExpected,
    ColonExpected,
    OpenParenExpected,
    TypeExpected,
    SemicolonExpected,
    BeginExpected,
    AssignExpected,
    ThenExpected,
    StatementExpected,
    FactorExpected,
}

impl SyntaxCode {
    pub fn code(&self) -> u16 {
        match self {
            SyntaxCode::IdentifierExpected => 2,
            SyntaxCode::ProgramExpected => 3,
            SyntaxCode::CloseParenExpected => 4,
            SyntaxCode::ColonExpected => 5,
            SyntaxCode::OpenParenExpected => 9,
            SyntaxCode::TypeExpected => 10,
            SyntaxCode::SemicolonExpected => 14,
            SyntaxCode::BeginExpected => 17,
            SyntaxCode::AssignExpected => 51,
            SyntaxCode::ThenExpected => 52,
            SyntaxCode::StatementExpected => 900,
            SyntaxCode::FactorExpected => 903,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SyntaxCode::IdentifierExpected => "identifier expected",
            SyntaxCode::ProgramExpected => "'PROGRAM' expected",
            SyntaxCode::CloseParenExpected => "')' expected",
            SyntaxCode::ColonExpected => "':' expected",
            SyntaxCode::OpenParenExpected => "'(' expected",
            SyntaxCode::TypeExpected => "error in type",
            SyntaxCode::SemicolonExpected => "';' expected",
            SyntaxCode::BeginExpected => "'BEGIN' expected",
            SyntaxCode::AssignExpected => "':=' expected",
            SyntaxCode::ThenExpected => "'THEN' expected",
            SyntaxCode::StatementExpected => "illegal type of statement",
            SyntaxCode::FactorExpected => "illegal type of factor",
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("{}: {}", .0.code(), .0.message())]
    SyntaxError(SyntaxCode),
    #[error("identifier declared twice")]
    DuplicateDeclaration { name: String },
    #[error("identifier not declared")]
    UndeclaredIdentifier { name: String },
    #[error("EOF expected")]
    TrailingInput { token: String },
    #[error("invalid numeric input: {token:?}")]
    InvalidInput { token: String },
    #[error("unexpected end of input")]
    EndOfInput,
    #[error("I/O error: {message}")]
    Io { message: String },
}
