use crate::{
    ast::{
        ast::{Expr, Node},
        expressions::{
            BooleanExpr, CallExpr, FunctionExpr, IdentifierExpr, IfExpr, InfixExpr, IntegerExpr,
            PrefixExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

/// Parses an expression whose operators all bind tighter than `bp`.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.enter_nesting()?;
    let result = parse_expr_inner(parser, bp);
    parser.exit_nesting();

    result
}

fn parse_expr_inner(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind) else {
        let token = parser.current_token().value.clone();
        let error = if token_kind == TokenKind::Illegal {
            ErrorImpl::UnrecognisedToken { token }
        } else {
            ErrorImpl::UnexpectedToken { token }
        };
        return Err(Error::new(error, parser.get_position()));
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than bp, fold it into lhs
    while parser.current_binding_power() > bp {
        let token_kind = parser.current_token_kind();
        let Some(led) = parser.get_led_lookup().get(&token_kind) else {
            break;
        };

        let operator_bp = parser.current_binding_power();
        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Integer => {
            let token = parser.current_token().clone();

            match token.value.parse::<i64>() {
                Ok(value) => {
                    parser.advance();
                    Ok(Expr::Integer(IntegerExpr { value, token }))
                }
                Err(_) => Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value },
                    token.span.start,
                )),
            }
        }
        TokenKind::Identifier => {
            let token = parser.advance().clone();
            Ok(Expr::Identifier(IdentifierExpr {
                value: token.value.clone(),
                token,
            }))
        }
        TokenKind::True | TokenKind::False => {
            let token = parser.advance().clone();
            Ok(Expr::Boolean(BooleanExpr {
                value: token.kind == TokenKind::True,
                token,
            }))
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    // Same bp on the right keeps equal-precedence chains left-associative
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left: Box::new(left),
        operator: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let rhs = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        span: Span {
            start: operator_token.span.start.clone(),
            end: rhs.get_span().end.clone(),
        },
        operator: operator_token,
        right: Box::new(rhs),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance().clone();

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect(TokenKind::CloseParen)?;

    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.skip_optional(TokenKind::Else) {
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        span: Span {
            start: token.span.start.clone(),
            end: parser.last_end(),
        },
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_function_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance().clone();

    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            let name = parser.expect(TokenKind::Identifier)?;
            parameters.push(IdentifierExpr {
                value: name.value.clone(),
                token: name,
            });

            if !parser.skip_optional(TokenKind::Comma) {
                break;
            }
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let body = parse_block_stmt(parser)?;

    Ok(Expr::Function(FunctionExpr {
        span: Span {
            start: token.span.start.clone(),
            end: parser.last_end(),
        },
        token,
        parameters,
        body,
    }))
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let token = parser.advance().clone();

    let mut arguments = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            arguments.push(parse_expr(parser, BindingPower::Lowest)?);

            if !parser.skip_optional(TokenKind::Comma) {
                break;
            }
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Call(CallExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: parser.last_end(),
        },
        token,
        function: Box::new(left),
        arguments,
    }))
}
