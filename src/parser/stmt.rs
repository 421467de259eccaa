use crate::{
    ast::{
        ast::{Expr, StmtWrapper},
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

/// Parses one statement starting at the current token. Dispatches through
/// the statement lookup table; any token kind without a registered handler
/// begins an expression statement. On return the current token is the last
/// token of the statement (the semicolon when one was present).
pub fn parse_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    if let Some(handler) = handler {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.current_token().span.start.clone();

    let identifier = parser.expect_peek(TokenKind::Identifier)?.value;
    parser.expect_peek(TokenKind::Assignment)?;

    parser.advance();
    let value = parse_expr(parser, BindingPower::Default)?;

    // Semicolons terminate statements but a trailing one may be omitted
    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(StmtWrapper::new(LetStmt {
        span: Span {
            start,
            end: parser.current_token().span.end.clone(),
        },
        identifier,
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.current_token().span.start.clone();

    parser.advance();

    let value;
    if parser.current_is(TokenKind::Semicolon) || parser.current_is(TokenKind::EOF) {
        // Value-less return
        value = None;
    } else {
        value = Some(parse_expr(parser, BindingPower::Default)?);

        if parser.peek_is(TokenKind::Semicolon) {
            parser.advance();
        }
    }

    Ok(StmtWrapper::new(ReturnStmt {
        value,
        span: Span {
            start,
            end: parser.current_token().span.end.clone(),
        },
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let expression = parse_expr(parser, BindingPower::Default)?;

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(StmtWrapper::new(ExpressionStmt {
        span: expression.get_span().clone(),
        expression,
    }))
}

/// Parses a braced block. The current token must be the opening brace; on
/// return the current token is the closing brace.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.current_token().span.start.clone();

    parser.advance();

    let mut body = vec![];
    while !parser.current_is(TokenKind::CloseCurly) {
        if parser.current_is(TokenKind::EOF) {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: TokenKind::CloseCurly,
                    received: TokenKind::EOF,
                },
                parser.get_position(),
            ));
        }

        body.push(parse_stmt(parser)?);
        parser.advance();
    }

    Ok(BlockStmt {
        body,
        span: Span {
            start,
            end: parser.current_token().span.end.clone(),
        },
    })
}
