use std::fmt::Display;

use crate::{lexer::tokens::Token, Span};

use super::{
    ast::{Expr, Node, Stmt},
    expressions::IdentifierExpr,
};

/// `let <name> = <value>;`
#[derive(Debug, Clone)]
pub struct LetStmt {
    pub token: Token,
    pub name: IdentifierExpr,
    pub value: Expr,
    pub span: Span,
}

impl Node for LetStmt {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = {};", self.token_literal(), self.name, self.value)
    }
}

/// `return [<value>];`
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Option<Expr>,
    pub span: Span,
}

impl Node for ReturnStmt {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ", self.token_literal())?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        write!(f, ";")
    }
}

/// A bare expression in statement position.
#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    /// First token of the expression.
    pub token: Token,
    pub expression: Expr,
    pub span: Span,
}

impl Node for ExpressionStmt {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// `{ <stmt>* }`, the body of `if` branches and function literals.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub token: Token,
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.body.iter()
    }
}

impl Node for BlockStmt {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ ")?;
        for stmt in &self.body {
            // `(a); (b)` must not re-parse as the call `(a)(b)`
            match stmt {
                Stmt::Expression(_) => write!(f, "{}; ", stmt)?,
                _ => write!(f, "{} ", stmt)?,
            }
        }
        write!(f, "}}")
    }
}
