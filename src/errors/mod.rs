//! Error types and error handling for the front end.
//!
//! Nothing here is ever thrown across the lexer/parser boundary. The
//! parser collects these values into an ordered list and hands them back
//! next to the (possibly partial) program.

pub mod errors;

#[cfg(test)]
mod tests;
