use crate::{
    ast::{
        ast::{Expr, ExprWrapper},
        expressions::{
            BinaryExpr, BooleanExpr, CallExpr, FnExpr, IfExpr, NumberExpr, PrefixExpr, SymbolExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block};

/// The Pratt loop. Parses one expression starting at the current token,
/// consuming infix operators from the peek slot for as long as they bind
/// tighter than `bp`. On return the current token is the last token of the
/// parsed expression.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => {
            let error_impl = if token_kind == TokenKind::Illegal {
                ErrorImpl::UnrecognisedToken {
                    token: parser.current_token().value.clone(),
                }
            } else {
                ErrorImpl::NoPrefixFunction {
                    token: token_kind.to_string(),
                }
            };
            return Err(Error::new(error_impl, parser.get_position()));
        }
    };

    let mut left = nud(parser)?;

    // While the peek token has a LED and binds strictly tighter than bp,
    // fold it into the left-hand side. Strict comparison keeps same-power
    // operators left associative.
    while !parser.peek_is(TokenKind::Semicolon)
        && *parser
            .get_bp_lookup()
            .get(&parser.peek_token_kind())
            .unwrap_or(&BindingPower::Default)
            > bp
    {
        let peek_kind = parser.peek_token_kind();
        let led = match parser.get_led_lookup().get(&peek_kind) {
            Some(led) => *led,
            None => break,
        };
        let operator_bp = *parser
            .get_bp_lookup()
            .get(&peek_kind)
            .unwrap_or(&BindingPower::Default);

        parser.advance();
        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Number => match token.value.parse::<i64>() {
            Ok(value) => Ok(ExprWrapper::new(NumberExpr {
                value,
                span: token.span,
            })),
            Err(_) => Err(Error::new(
                ErrorImpl::NumberParseError { token: token.value },
                parser.get_position(),
            )),
        },
        TokenKind::Identifier => Ok(ExprWrapper::new(SymbolExpr {
            value: token.value,
            span: token.span,
        })),
        TokenKind::True | TokenKind::False => Ok(ExprWrapper::new(BooleanExpr {
            value: token.kind == TokenKind::True,
            span: token.span,
        })),
        _ => Err(Error::new(
            ErrorImpl::NoPrefixFunction {
                token: token.kind.to_string(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    let operator_token = parser.current_token().clone();

    parser.advance();
    let right = parse_expr(parser, bp)?;

    Ok(ExprWrapper::new(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left,
        operator: operator_token,
        right,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let operator_token = parser.current_token().clone();

    parser.advance();
    let right = parse_expr(parser, BindingPower::Unary)?;

    Ok(ExprWrapper::new(PrefixExpr {
        span: Span {
            start: operator_token.span.start.clone(),
            end: right.get_span().end.clone(),
        },
        operator: operator_token,
        right,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    _bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    // Current token is the opening paren
    let mut arguments = vec![];

    if parser.peek_is(TokenKind::CloseParen) {
        parser.advance();
    } else {
        parser.advance();
        arguments.push(parse_expr(parser, BindingPower::Default)?);

        while parser.peek_is(TokenKind::Comma) {
            parser.advance();
            parser.advance();
            arguments.push(parse_expr(parser, BindingPower::Default)?);
        }

        parser.expect_peek(TokenKind::CloseParen)?;
    }

    Ok(ExprWrapper::new(CallExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        callee: left,
        arguments,
    }))
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.current_token().span.start.clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block(parser)?;

    let alternative = if parser.peek_is(TokenKind::Else) {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block(parser)?)
    } else {
        None
    };

    Ok(ExprWrapper::new(IfExpr {
        span: Span {
            start,
            end: parser.current_token().span.end.clone(),
        },
        condition,
        consequence,
        alternative,
    }))
}

pub fn parse_fn_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.current_token().span.start.clone();

    parser.expect_peek(TokenKind::OpenParen)?;

    let mut parameters = vec![];
    if parser.peek_is(TokenKind::CloseParen) {
        parser.advance();
    } else {
        parameters.push(parser.expect_peek(TokenKind::Identifier)?.value);

        while parser.peek_is(TokenKind::Comma) {
            parser.advance();
            parameters.push(parser.expect_peek(TokenKind::Identifier)?.value);
        }

        parser.expect_peek(TokenKind::CloseParen)?;
    }

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block(parser)?;

    Ok(ExprWrapper::new(FnExpr {
        span: Span {
            start,
            end: parser.current_token().span.end.clone(),
        },
        parameters,
        body,
    }))
}
