use log::debug;

use crate::{
    ast::{
        ast::{Node, Stmt},
        expressions::IdentifierExpr,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = parser.get_stmt_lookup().get(&parser.current_token_kind()) {
        debug!("parsing {} statement", parser.current_token_kind());
        return handler(parser);
    }

    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    // Optional so single-line REPL input works
    parser.skip_optional(TokenKind::Semicolon);

    Ok(Stmt::Expression(ExpressionStmt {
        span: Span {
            start: token.span.start.clone(),
            end: expression.get_span().end.clone(),
        },
        token,
        expression,
    }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.advance().clone();

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected identifier"),
        },
        parser.get_position(),
    );
    let name_token = parser.expect_error(TokenKind::Identifier, Some(error))?;

    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Lowest)?;

    parser.skip_optional(TokenKind::Semicolon);

    Ok(Stmt::Let(LetStmt {
        span: Span {
            start: start_token.span.start.clone(),
            end: parser.last_end(),
        },
        token: start_token,
        name: IdentifierExpr {
            value: name_token.value.clone(),
            token: name_token,
        },
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.advance().clone();

    let value = match parser.current_token_kind() {
        TokenKind::Semicolon | TokenKind::CloseCurly | TokenKind::EOF => None,
        _ => Some(parse_expr(parser, BindingPower::Lowest)?),
    };

    parser.skip_optional(TokenKind::Semicolon);

    Ok(Stmt::Return(ReturnStmt {
        span: Span {
            start: start_token.span.start.clone(),
            end: parser.last_end(),
        },
        token: start_token,
        value,
    }))
}

/// Parses `{ <stmt>* }`.
///
/// Statements inside the braces recover from errors on their own; only a
/// missing brace fails the block. A block counts as one nesting level.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.enter_nesting()?;
    let block = parse_block_body(parser);
    parser.exit_nesting();

    block
}

fn parse_block_body(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let token = parser.expect(TokenKind::OpenCurly)?;

    let body = parser.parse_stmts_until(TokenKind::CloseCurly);

    parser.expect(TokenKind::CloseCurly)?;

    Ok(BlockStmt {
        span: Span {
            start: token.span.start.clone(),
            end: parser.last_end(),
        },
        token,
        body,
    })
}
