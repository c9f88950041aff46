use crate::{
    ast::expressions::{Expression, Factor, SimpleExpression, Term},
    errors::errors::{Error, ErrorImpl, SyntaxCode},
    lexer::tokens::TokenKind,
    symbols::symbol_table::SymbolTable,
};

use super::{
    lookups::{additive_operator, multiplicative_operator, relational_operator},
    parser::Parser,
};

/// `simple_exp [ relop simple_exp ]`
pub fn parse_expression(parser: &mut Parser, symbols: &SymbolTable) -> Result<Expression, Error> {
    parser.enter("expression");
    let first = parse_simple_expression(parser, symbols)?;

    let relation = match relational_operator(parser.current_token_kind()) {
        Some(operator) => {
            parser.advance();
            Some((operator, parse_simple_expression(parser, symbols)?))
        }
        None => None,
    };

    parser.exit("expression");
    Ok(Expression { first, relation })
}

pub fn parse_simple_expression(
    parser: &mut Parser,
    symbols: &SymbolTable,
) -> Result<SimpleExpression, Error> {
    parser.enter("simple_exp");
    let first = parse_term(parser, symbols)?;

    let mut rest = vec![];
    while let Some(operator) = additive_operator(parser.current_token_kind()) {
        parser.advance();
        rest.push((operator, parse_term(parser, symbols)?));
    }

    parser.exit("simple_exp");
    Ok(SimpleExpression { first, rest })
}

pub fn parse_term(parser: &mut Parser, symbols: &SymbolTable) -> Result<Term, Error> {
    parser.enter("term");
    let first = parse_factor(parser, symbols)?;

    let mut rest = vec![];
    while let Some(operator) = multiplicative_operator(parser.current_token_kind()) {
        parser.advance();
        rest.push((operator, parse_factor(parser, symbols)?));
    }

    parser.exit("term");
    Ok(Term { first, rest })
}

pub fn parse_factor(parser: &mut Parser, symbols: &SymbolTable) -> Result<Factor, Error> {
    let Some(handler) = parser.get_factor_handler(parser.current_token_kind()) else {
        return Err(parser.error(ErrorImpl::SyntaxError(SyntaxCode::FactorExpected)));
    };

    parser.enter("factor");
    let factor = handler(parser, symbols)?;
    parser.exit("factor");

    Ok(factor)
}

pub fn parse_number_factor(parser: &mut Parser, _symbols: &SymbolTable) -> Result<Factor, Error> {
    let token = parser.current_token().value.clone();

    let factor = match parser.current_token_kind() {
        TokenKind::IntLiteral => token.parse().map(Factor::IntLiteral).ok(),
        _ => token.parse().map(Factor::FloatLiteral).ok(),
    };

    let Some(factor) = factor else {
        return Err(parser.error(ErrorImpl::NumberParseError { token }));
    };

    parser.advance();
    Ok(factor)
}

pub fn parse_identifier_factor(parser: &mut Parser, symbols: &SymbolTable) -> Result<Factor, Error> {
    let identifier = parser.advance();
    symbols.ensure_declared(&identifier.value, identifier.span.start)?;

    Ok(Factor::Identifier(identifier.value))
}

/// `'(' expression ')'`
pub fn parse_grouping_factor(parser: &mut Parser, symbols: &SymbolTable) -> Result<Factor, Error> {
    parser.advance();
    let expression = parse_expression(parser, symbols)?;
    parser.expect(TokenKind::CloseParen, SyntaxCode::CloseParenExpected)?;

    Ok(Factor::Grouping(Box::new(expression)))
}

pub fn parse_not_factor(parser: &mut Parser, symbols: &SymbolTable) -> Result<Factor, Error> {
    parser.advance();
    Ok(Factor::Not(Box::new(parse_factor(parser, symbols)?)))
}

pub fn parse_minus_factor(parser: &mut Parser, symbols: &SymbolTable) -> Result<Factor, Error> {
    parser.advance();
    Ok(Factor::Minus(Box::new(parse_factor(parser, symbols)?)))
}
