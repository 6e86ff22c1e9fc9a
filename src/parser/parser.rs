//! Parser implementation for building the Abstract Syntax Tree.
//!
//! The parser walks a token buffer with a single cursor. Statements are
//! dispatched through the statement table, expressions through the
//! NUD/LED tables in `lookups`. Rule functions return `Result` and bail
//! out with `?`; the statement loop records the error, skips ahead to the
//! next statement boundary and carries on, so a parse always yields a
//! program plus the ordered list of everything that went wrong.

use std::rc::Rc;

use log::{debug, info};

use crate::{
    ast::ast::{Program, Stmt},
    errors::errors::{errors_to_strings, Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::{
    lookups::{BindingPower, Lookups, LEDLookup, NUDLookup, StmtLookup, LOOKUPS},
    stmt::parse_stmt,
};

/// Nesting allowed by `ParserOptions::default()`.
///
/// Each `if`/`fn` body costs two levels (its statement and its block) and
/// is the deepest stack use per level; 64 keeps that worst case well inside
/// a 2 MB thread stack in debug builds.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Tunables for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// How deeply expressions and blocks may nest before the parser gives
    /// up on the statement with `StackLimitExceeded`.
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The tokens to parse; always ends with an EOF token
    tokens: Vec<Token>,
    /// Index of the current token
    pos: usize,
    /// The name of the source being parsed
    file: Rc<String>,
    /// Static rule tables
    lookups: &'static Lookups,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    /// Expressions and blocks currently open
    depth: usize,
    options: ParserOptions,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser::with_options(tokens, file, ParserOptions::default())
    }

    pub fn with_options(mut tokens: Vec<Token>, file: Rc<String>, options: ParserOptions) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| Position(0, Rc::clone(&file)));
            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span {
                    start: end.clone(),
                    end
                }
            ));
        }

        Parser {
            tokens,
            pos: 0,
            file,
            lookups: &*LOOKUPS,
            errors: vec![],
            depth: 0,
            options,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the token after the current one; EOF repeats forever.
    pub fn peek_token(&self) -> &Token {
        &self.tokens[(self.pos + 1).min(self.tokens.len() - 1)]
    }

    /// Advances to the next token and returns the previous one.
    ///
    /// The cursor never moves past the EOF token.
    pub fn advance(&mut self) -> &Token {
        let current = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[current]
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(&mut self, expected_kind: TokenKind, error: Option<Error>) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::ExpectedToken {
                        expected: expected_kind.to_string(),
                        found: token.value.clone(),
                    },
                    token.span.start.clone(),
                )),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Consumes the current token if it is of `kind`.
    pub fn skip_optional(&mut self, kind: TokenKind) -> bool {
        if self.current_token_kind() == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    pub fn get_stmt_lookup(&self) -> &'static StmtLookup {
        let lookups: &'static Lookups = self.lookups;
        lookups.get_stmt_lookup()
    }

    pub fn get_nud_lookup(&self) -> &'static NUDLookup {
        let lookups: &'static Lookups = self.lookups;
        lookups.get_nud_lookup()
    }

    pub fn get_led_lookup(&self) -> &'static LEDLookup {
        let lookups: &'static Lookups = self.lookups;
        lookups.get_led_lookup()
    }

    /// Binding power of the current token as an infix operator.
    pub fn current_binding_power(&self) -> BindingPower {
        self.lookups.binding_power(self.current_token_kind())
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    /// End of the most recently consumed token.
    pub fn last_end(&self) -> Position {
        match self.pos.checked_sub(1) {
            Some(previous) => self.tokens[previous].span.end.clone(),
            None => Position(0, Rc::clone(&self.file)),
        }
    }

    /// Marks entry into a nested expression or block.
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= self.options.max_depth {
            return Err(Error::new(
                ErrorImpl::StackLimitExceeded {
                    limit: self.options.max_depth,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn push_error(&mut self, error: Error) {
        debug!("parse error at {}:{}: {}", error.get_position().1, error.get_position().0, error);
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        errors_to_strings(&self.errors)
    }

    /// Parses statements until `closing` (not consumed) or EOF.
    ///
    /// A statement that fails is recorded and skipped; it contributes no
    /// node.
    pub fn parse_stmts_until(&mut self, closing: TokenKind) -> Vec<Stmt> {
        let mut body = vec![];

        while self.has_tokens() && self.current_token_kind() != closing {
            let start = self.pos;
            match parse_stmt(self) {
                Ok(stmt) => body.push(stmt),
                Err(error) => {
                    self.push_error(error);
                    self.synchronize(start, closing);
                }
            }
        }

        body
    }

    /// Skips to just past the next `;`, or up to `closing`/EOF.
    ///
    /// At least one token is dropped when the failed statement consumed
    /// nothing, so the statement loop always moves forward.
    fn synchronize(&mut self, start: usize, closing: TokenKind) {
        if self.pos == start {
            let skipped = self.advance().kind;
            if skipped == TokenKind::Semicolon {
                return;
            }
        }

        while self.has_tokens()
            && self.current_token_kind() != TokenKind::Semicolon
            && self.current_token_kind() != closing
        {
            self.advance();
        }

        self.skip_optional(TokenKind::Semicolon);
        debug!("resynchronized at token {} ({})", self.pos, self.current_token());
    }
}

/// Parses a stream of tokens into a program.
///
/// Never fails: the program holds every statement that parsed, the error
/// list everything that did not.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> (Program, Vec<Error>) {
    parse_with_options(tokens, file, ParserOptions::default())
}

pub fn parse_with_options(tokens: Vec<Token>, file: Rc<String>, options: ParserOptions) -> (Program, Vec<Error>) {
    let mut parser = Parser::with_options(tokens, Rc::clone(&file), options);
    info!("parsing {} tokens from {}", parser.tokens.len(), file);

    let statements = parser.parse_stmts_until(TokenKind::EOF);

    let program = Program {
        statements,
        span: Span {
            start: Position(0, Rc::clone(&file)),
            end: parser.current_token().span.end.clone(),
        },
    };

    info!(
        "parsed {} statements from {} with {} errors",
        program.len(),
        file,
        parser.errors.len()
    );

    (program, parser.errors)
}
