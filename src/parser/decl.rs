use crate::{
    ast::ast::{Block, Program},
    errors::errors::{Error, ErrorImpl, SyntaxCode},
    lexer::tokens::TokenKind,
    symbols::symbol_table::SymbolTable,
};

use super::{parser::Parser, stmt::parse_compound};

/// `PROGRAM IDENT ';' block`, then end of input.
pub fn parse_program(parser: &mut Parser, symbols: &mut SymbolTable) -> Result<Program, Error> {
    let start = parser.get_position();
    parser.enter("program");

    parser.expect(TokenKind::Program, SyntaxCode::ProgramExpected)?;
    let name = parser.expect(TokenKind::Identifier, SyntaxCode::IdentifierExpected)?.value;
    parser.expect(TokenKind::Semicolon, SyntaxCode::SemicolonExpected)?;

    let block = parse_block(parser, symbols)?;
    parser.exit("program");

    if parser.current_token_kind() != TokenKind::EOF {
        let token = parser.current_token().value.clone();
        return Err(parser.error(ErrorImpl::TrailingInput { token }));
    }

    Ok(Program {
        name,
        block,
        span: parser.span_from(start),
    })
}

/// Declarations followed by the block's compound statement.
pub fn parse_block(parser: &mut Parser, symbols: &mut SymbolTable) -> Result<Block, Error> {
    parser.enter("block");

    loop {
        match parser.current_token_kind() {
            TokenKind::Var => {
                parser.advance();
            }
            TokenKind::Identifier => {
                parse_var_decl(parser, symbols)?;
                parser.expect(TokenKind::Semicolon, SyntaxCode::SemicolonExpected)?;
            }
            _ => break,
        }
    }

    let compound = parse_compound(parser, symbols)?;
    parser.exit("block");

    Ok(Block { compound })
}

/// `IDENT ':' (REAL|INTEGER)`, declaring the identifier.
pub fn parse_var_decl(parser: &mut Parser, symbols: &mut SymbolTable) -> Result<(), Error> {
    let identifier = parser.expect(TokenKind::Identifier, SyntaxCode::IdentifierExpected)?;
    parser.expect(TokenKind::Colon, SyntaxCode::ColonExpected)?;

    if !parser
        .current_token()
        .is_one_of_many(&[TokenKind::Real, TokenKind::Integer])
    {
        return Err(parser.error(ErrorImpl::SyntaxError(SyntaxCode::TypeExpected)));
    }
    let variable_type = parser.advance();

    parser.log(format!(
        "-- idName: |{}| idType: |{}| --",
        identifier.value,
        variable_type.kind.name()
    ));

    symbols.declare(&identifier.value, identifier.span.start)
}
