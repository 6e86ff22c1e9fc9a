use std::fmt::Display;

use crate::{lexer::tokens::Token, Span};

use super::{
    ast::{Expr, Node},
    statements::BlockStmt,
};

// LITERALS

/// Identifier Expression
/// A reference to a name.
#[derive(Debug, Clone)]
pub struct IdentifierExpr {
    pub value: String,
    pub token: Token,
}

impl Node for IdentifierExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> &Span {
        &self.token.span
    }
}

impl Display for IdentifierExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Expression
/// A decimal integer literal. Negative numbers are prefix expressions.
#[derive(Debug, Clone)]
pub struct IntegerExpr {
    pub value: i64,
    pub token: Token,
}

impl Node for IntegerExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> &Span {
        &self.token.span
    }
}

impl Display for IntegerExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.value)
    }
}

/// Boolean Expression
#[derive(Debug, Clone)]
pub struct BooleanExpr {
    pub value: bool,
    pub token: Token,
}

impl Node for BooleanExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> &Span {
        &self.token.span
    }
}

impl Display for BooleanExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

// COMPLEX

/// Prefix Expression
/// A unary operator (`!` or `-`) applied to an operand.
#[derive(Debug, Clone)]
pub struct PrefixExpr {
    pub operator: Token,
    pub right: Box<Expr>,
    pub span: Span,
}

impl Node for PrefixExpr {
    fn token_literal(&self) -> &str {
        &self.operator.value
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operator.value, self.right)
    }
}

/// Infix Expression
/// A binary operation between two expressions.
#[derive(Debug, Clone)]
pub struct InfixExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
    pub span: Span,
}

impl Node for InfixExpr {
    fn token_literal(&self) -> &str {
        &self.operator.value
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator.value, self.right)
    }
}

/// If Expression
/// `if (<condition>) { ... } else { ... }`; the value of the taken branch.
#[derive(Debug, Clone)]
pub struct IfExpr {
    pub token: Token,
    pub condition: Box<Expr>,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
    pub span: Span,
}

impl Node for IfExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) {}", self.token_literal(), self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, " else {}", alternative)?;
        }
        Ok(())
    }
}

/// Function Expression
/// A function literal: parameter names and a body.
#[derive(Debug, Clone)]
pub struct FunctionExpr {
    pub token: Token,
    pub parameters: Vec<IdentifierExpr>,
    pub body: BlockStmt,
    pub span: Span,
}

impl Node for FunctionExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for FunctionExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parameters: Vec<String> = self.parameters.iter().map(|p| p.to_string()).collect();
        write!(f, "{}({}) {}", self.token_literal(), parameters.join(", "), self.body)
    }
}

/// Call Expression
/// Applies `function` to `arguments`. The token is the opening parenthesis.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub token: Token,
    pub function: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

impl Node for CallExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arguments: Vec<String> = self.arguments.iter().map(|a| a.to_string()).collect();
        write!(f, "{}({})", self.function, arguments.join(", "))
    }
}
