//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! Transforms a stream of tokens into a `Program`. Statements are parsed
//! by recursive descent; expressions by a Pratt parser:
//!
//! - NUD (null denotation) handlers for tokens that start an expression
//! - LED (left denotation) handlers for tokens that continue one
//! - Binding powers deciding how far each operator reaches
//!
//! Errors are collected rather than returned early; see `parser::parse`.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
