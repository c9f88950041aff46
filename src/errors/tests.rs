//! Unit tests for error handling.
//!
//! This module contains tests for error types, codes and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, SyntaxCode};
use crate::Position;
use std::rc::Rc;

fn position(line: u32) -> Position {
    Position::new(0, line, Rc::new("test.pas".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(1),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_lexeme(), None);
}

#[test]
fn test_error_position_and_lexeme() {
    let error = Error::with_lexeme(
        ErrorImpl::SyntaxError(SyntaxCode::SemicolonExpected),
        Position::new(42, 3, Rc::new("test.pas".to_string())),
        "END",
    );

    assert_eq!(error.get_position().offset, 42);
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_lexeme(), Some("END"));
}

#[test]
fn test_syntax_error_display() {
    let error = Error::new(ErrorImpl::SyntaxError(SyntaxCode::SemicolonExpected), position(1));

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(error.code(), Some(14));
    assert_eq!(error.to_string(), "14: ';' expected");
}

#[test]
fn test_syntax_code_catalog() {
    let catalog = [
        (SyntaxCode::IdentifierExpected, 2, "identifier expected"),
        (SyntaxCode::ProgramExpected, 3, "'PROGRAM' expected"),
        (SyntaxCode::CloseParenExpected, 4, "')' expected"),
        (SyntaxCode::ColonExpected, 5, "':' expected"),
        (SyntaxCode::OpenParenExpected, 9, "'(' expected"),
        (SyntaxCode::TypeExpected, 10, "error in type"),
        (SyntaxCode::SemicolonExpected, 14, "';' expected"),
        (SyntaxCode::BeginExpected, 17, "'BEGIN' expected"),
        (SyntaxCode::AssignExpected, 51, "':=' expected"),
        (SyntaxCode::ThenExpected, 52, "'THEN' expected"),
        (SyntaxCode::StatementExpected, 900, "illegal type of statement"),
        (SyntaxCode::FactorExpected, 903, "illegal type of factor"),
    ];

    for (syntax_code, code, message) in catalog {
        assert_eq!(syntax_code.code(), code);
        assert_eq!(syntax_code.message(), message);
    }
}

#[test]
fn test_undeclared_identifier_error() {
    let error = Error::new(
        ErrorImpl::UndeclaredIdentifier {
            name: "foo".to_string(),
        },
        position(1),
    );

    assert_eq!(error.get_error_name(), "UndeclaredIdentifier");
    assert_eq!(error.to_string(), "104: identifier not declared");
}

#[test]
fn test_duplicate_declaration_error() {
    let error = Error::new(
        ErrorImpl::DuplicateDeclaration {
            name: "x".to_string(),
        },
        position(1),
    );

    assert_eq!(error.get_error_name(), "DuplicateDeclaration");
    assert_eq!(error.to_string(), "101: identifier declared twice");
}

#[test]
fn test_trailing_input_error() {
    let error = Error::new(
        ErrorImpl::TrailingInput {
            token: "x".to_string(),
        },
        position(9),
    );

    assert_eq!(error.code(), None);
    assert_eq!(error.to_string(), "EOF expected");
}

#[test]
fn test_runtime_errors() {
    let error = Error::new(ErrorImpl::InvalidInput { token: "abc".to_string() }, position(1));
    assert_eq!(error.get_error_name(), "InvalidInput");
    assert_eq!(error.to_string(), "invalid numeric input: \"abc\"");

    let error = Error::new(ErrorImpl::EndOfInput, position(1));
    assert_eq!(error.to_string(), "unexpected end of input");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UndeclaredIdentifier {
            name: "y".to_string(),
        },
        position(1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`y`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
