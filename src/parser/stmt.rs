use crate::{
    ast::{
        ast::Stmt,
        statements::{AssignmentStmt, CompoundStmt, IfStmt, ReadStmt, WhileStmt, WriteOperand, WriteStmt},
    },
    errors::errors::{Error, ErrorImpl, SyntaxCode},
    lexer::tokens::TokenKind,
    symbols::symbol_table::SymbolTable,
};

use super::{expr::parse_expression, parser::Parser};

pub fn parse_stmt(parser: &mut Parser, symbols: &SymbolTable) -> Result<Stmt, Error> {
    match parser.get_stmt_handler(parser.current_token_kind()) {
        Some(handler) => handler(parser, symbols),
        None => Err(parser.error(ErrorImpl::SyntaxError(SyntaxCode::StatementExpected))),
    }
}

/// `BEGIN statement { ';' statement } END`
pub fn parse_compound(parser: &mut Parser, symbols: &SymbolTable) -> Result<CompoundStmt, Error> {
    let start = parser.get_position();
    parser.enter("compound_stmt");
    parser.expect(TokenKind::Begin, SyntaxCode::BeginExpected)?;

    let mut body = vec![parse_stmt(parser, symbols)?];
    while parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance();
        body.push(parse_stmt(parser, symbols)?);
    }

    // Anything other than END here is a missing separator.
    parser.expect(TokenKind::End, SyntaxCode::SemicolonExpected)?;
    parser.exit("compound_stmt");

    Ok(CompoundStmt {
        body,
        span: parser.span_from(start),
    })
}

pub fn parse_compound_stmt(parser: &mut Parser, symbols: &SymbolTable) -> Result<Stmt, Error> {
    Ok(Stmt::Compound(parse_compound(parser, symbols)?))
}

pub fn parse_if_stmt(parser: &mut Parser, symbols: &SymbolTable) -> Result<Stmt, Error> {
    let start = parser.get_position();
    parser.enter("if");
    parser.advance();

    let condition = parse_expression(parser, symbols)?;
    parser.expect(TokenKind::Then, SyntaxCode::ThenExpected)?;
    let then_body = Box::new(parse_stmt(parser, symbols)?);

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(Box::new(parse_stmt(parser, symbols)?))
    } else {
        None
    };

    parser.exit("if");
    Ok(Stmt::If(IfStmt {
        condition,
        then_body,
        else_body,
        span: parser.span_from(start),
    }))
}

pub fn parse_while_stmt(parser: &mut Parser, symbols: &SymbolTable) -> Result<Stmt, Error> {
    let start = parser.get_position();
    parser.enter("while");
    parser.advance();

    let condition = parse_expression(parser, symbols)?;
    let body = Box::new(parse_stmt(parser, symbols)?);

    parser.exit("while");
    Ok(Stmt::While(WhileStmt {
        condition,
        body,
        span: parser.span_from(start),
    }))
}

/// `READ '(' IDENT ')'`
pub fn parse_read_stmt(parser: &mut Parser, symbols: &SymbolTable) -> Result<Stmt, Error> {
    let start = parser.get_position();
    parser.enter("read");
    parser.advance();

    parser.expect(TokenKind::OpenParen, SyntaxCode::OpenParenExpected)?;
    let identifier = parser.expect(TokenKind::Identifier, SyntaxCode::IdentifierExpected)?;
    symbols.ensure_declared(&identifier.value, identifier.span.start)?;
    parser.expect(TokenKind::CloseParen, SyntaxCode::CloseParenExpected)?;

    parser.exit("read");
    Ok(Stmt::Read(ReadStmt {
        identifier: identifier.value,
        span: parser.span_from(start),
    }))
}

/// `WRITE '(' (IDENT | STRINGLIT) ')'`
pub fn parse_write_stmt(parser: &mut Parser, symbols: &SymbolTable) -> Result<Stmt, Error> {
    let start = parser.get_position();
    parser.enter("write");
    parser.advance();

    parser.expect(TokenKind::OpenParen, SyntaxCode::OpenParenExpected)?;
    let operand = match parser.current_token_kind() {
        TokenKind::Identifier => {
            let identifier = parser.advance();
            symbols.ensure_declared(&identifier.value, identifier.span.start)?;
            WriteOperand::Identifier(identifier.value)
        }
        TokenKind::StringLiteral => WriteOperand::Literal(parser.advance().value),
        _ => return Err(parser.error(ErrorImpl::SyntaxError(SyntaxCode::IdentifierExpected))),
    };
    parser.expect(TokenKind::CloseParen, SyntaxCode::CloseParenExpected)?;

    parser.exit("write");
    Ok(Stmt::Write(WriteStmt {
        operand,
        span: parser.span_from(start),
    }))
}

/// `IDENT ':=' expression`
pub fn parse_assignment_stmt(parser: &mut Parser, symbols: &SymbolTable) -> Result<Stmt, Error> {
    let start = parser.get_position();
    parser.enter("assignment");

    let identifier = parser.advance();
    symbols.ensure_declared(&identifier.value, identifier.span.start)?;

    parser.expect(TokenKind::Assign, SyntaxCode::AssignExpected)?;
    let value = parse_expression(parser, symbols)?;

    parser.exit("assignment");
    Ok(Stmt::Assignment(AssignmentStmt {
        identifier: identifier.value,
        value,
        span: parser.span_from(start),
    }))
}
