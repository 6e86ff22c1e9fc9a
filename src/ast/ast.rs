use std::fmt::{Debug, Display};

use crate::Span;

use super::{
    expressions::{
        BooleanExpr, CallExpr, FunctionExpr, IdentifierExpr, IfExpr, InfixExpr, IntegerExpr,
        PrefixExpr,
    },
    statements::{ExpressionStmt, LetStmt, ReturnStmt},
};

/// Node Trait
///
/// Behaviour shared by every node in the AST. `Display` gives the
/// canonical rendering used in diagnostics and tests.
pub trait Node: Debug + Display {
    /// Literal text of the token that introduced the node.
    fn token_literal(&self) -> &str;
    /// Returns the span of the node.
    fn get_span(&self) -> &Span;
}

/// Statements
///
/// The closed set of statement kinds a program is made of.
#[derive(Debug, Clone)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Node for Stmt {
    fn token_literal(&self) -> &str {
        match self {
            Stmt::Let(stmt) => stmt.token_literal(),
            Stmt::Return(stmt) => stmt.token_literal(),
            Stmt::Expression(stmt) => stmt.token_literal(),
        }
    }
    fn get_span(&self) -> &Span {
        match self {
            Stmt::Let(stmt) => stmt.get_span(),
            Stmt::Return(stmt) => stmt.get_span(),
            Stmt::Expression(stmt) => stmt.get_span(),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Let(stmt) => write!(f, "{}", stmt),
            Stmt::Return(stmt) => write!(f, "{}", stmt),
            Stmt::Expression(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expressions
///
/// Grouped expressions have no variant; the parentheses only steer
/// precedence while parsing.
#[derive(Debug, Clone)]
pub enum Expr {
    Identifier(IdentifierExpr),
    Integer(IntegerExpr),
    Boolean(BooleanExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(IfExpr),
    Function(FunctionExpr),
    Call(CallExpr),
}

impl Node for Expr {
    fn token_literal(&self) -> &str {
        match self {
            Expr::Identifier(expr) => expr.token_literal(),
            Expr::Integer(expr) => expr.token_literal(),
            Expr::Boolean(expr) => expr.token_literal(),
            Expr::Prefix(expr) => expr.token_literal(),
            Expr::Infix(expr) => expr.token_literal(),
            Expr::If(expr) => expr.token_literal(),
            Expr::Function(expr) => expr.token_literal(),
            Expr::Call(expr) => expr.token_literal(),
        }
    }
    fn get_span(&self) -> &Span {
        match self {
            Expr::Identifier(expr) => expr.get_span(),
            Expr::Integer(expr) => expr.get_span(),
            Expr::Boolean(expr) => expr.get_span(),
            Expr::Prefix(expr) => expr.get_span(),
            Expr::Infix(expr) => expr.get_span(),
            Expr::If(expr) => expr.get_span(),
            Expr::Function(expr) => expr.get_span(),
            Expr::Call(expr) => expr.get_span(),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Identifier(expr) => write!(f, "{}", expr),
            Expr::Integer(expr) => write!(f, "{}", expr),
            Expr::Boolean(expr) => write!(f, "{}", expr),
            Expr::Prefix(expr) => write!(f, "{}", expr),
            Expr::Infix(expr) => write!(f, "{}", expr),
            Expr::If(expr) => write!(f, "{}", expr),
            Expr::Function(expr) => write!(f, "{}", expr),
            Expr::Call(expr) => write!(f, "{}", expr),
        }
    }
}

/// Program
///
/// Root of the tree: the top-level statements in source order.
#[derive(Debug, Clone)]
pub struct Program {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

impl Program {
    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.statements.iter()
    }
    pub fn len(&self) -> usize {
        self.statements.len()
    }
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut statements = self.statements.iter().peekable();
        while let Some(stmt) = statements.next() {
            write!(f, "{}", stmt)?;

            // `a; (b)` must not re-parse as the call `a(b)`
            if matches!(stmt, Stmt::Expression(_)) && statements.peek().is_some() {
                write!(f, "; ")?;
            }
        }
        Ok(())
    }
}
