//! Lexical analysis module.
//!
//! Converts source text into a stream of tokens for parsing:
//!
//! - Tokenization using a static table of anchored regex patterns
//! - Recognition of keywords, identifiers, integer literals and operators
//! - Byte-offset spans on every token for error reporting
//! - Unrecognised characters become `Illegal` tokens instead of errors

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
