use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, lowest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

/// The parsing rules for every token kind, built once per process.
///
/// Only tokens with an infix rule get a binding power; everything else
/// counts as `BindingPower::Lowest` and ends the expression.
#[derive(Default)]
pub struct Lookups {
    stmt_lookup: StmtLookup,
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
    binding_power_lookup: BPLookup,
}

impl Lookups {
    /// Registers a left denotation (infix) handler and its binding power.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    pub fn binding_power(&self, kind: TokenKind) -> BindingPower {
        *self.binding_power_lookup.get(&kind).unwrap_or(&BindingPower::Lowest)
    }
}

lazy_static! {
    pub static ref LOOKUPS: Lookups = create_token_lookups();
}

pub fn create_token_lookups() -> Lookups {
    let mut lookups = Lookups::default();

    // Equality and relational
    lookups.led(TokenKind::Equals, BindingPower::Equals, parse_infix_expr);
    lookups.led(TokenKind::NotEquals, BindingPower::Equals, parse_infix_expr);
    lookups.led(TokenKind::Less, BindingPower::LessGreater, parse_infix_expr);
    lookups.led(TokenKind::Greater, BindingPower::LessGreater, parse_infix_expr);

    // Additive and multiplicative
    lookups.led(TokenKind::Plus, BindingPower::Sum, parse_infix_expr);
    lookups.led(TokenKind::Dash, BindingPower::Sum, parse_infix_expr);
    lookups.led(TokenKind::Star, BindingPower::Product, parse_infix_expr);
    lookups.led(TokenKind::Slash, BindingPower::Product, parse_infix_expr);

    lookups.led(TokenKind::OpenParen, BindingPower::Call, parse_call_expr);

    // Literals and symbols
    lookups.nud(TokenKind::Integer, parse_primary_expr);
    lookups.nud(TokenKind::Identifier, parse_primary_expr);
    lookups.nud(TokenKind::True, parse_primary_expr);
    lookups.nud(TokenKind::False, parse_primary_expr);
    lookups.nud(TokenKind::Not, parse_prefix_expr);
    lookups.nud(TokenKind::Dash, parse_prefix_expr);
    lookups.nud(TokenKind::OpenParen, parse_grouping_expr);
    lookups.nud(TokenKind::If, parse_if_expr);
    lookups.nud(TokenKind::Function, parse_function_expr);

    // Statements
    lookups.stmt(TokenKind::Let, parse_let_stmt);
    lookups.stmt(TokenKind::Return, parse_return_stmt);

    lookups
}
