#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// Byte offset into a source, together with the source's name.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tokenizes and parses `source` in one go.
///
/// The program is always returned; callers should refuse to evaluate it
/// when the error list is non-empty.
pub fn parse_source(source: &str, file: Option<String>) -> (Program, Vec<Error>) {
    let file_name = Rc::new(file.clone().unwrap_or_else(|| String::from("shell")));
    let tokens = tokenize(source.to_string(), file);

    parse(tokens, file_name)
}

/// Finds the line containing byte `position`.
///
/// Returns the 1-based line number, the line text (including its newline)
/// and the byte column within that line.
pub fn line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    // EOF diagnostics point one past the last byte
    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    if source.ends_with('\n') || source.is_empty() {
        Some((line_number, String::new(), 0))
    } else {
        let last = source.rsplit('\n').next().unwrap_or("");
        Some((line_number - 1, last.to_string(), last.len()))
    }
}

/// Renders an error as a caret report pointing into `source`.
pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: name (tip)
        -> test.monkey
          |
        1 | let = 5;
          | ----^
    */

    let position = error.get_position();
    let mut report = String::new();

    if let ErrorTip::None = error.get_tip() {
        report.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        report.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    report.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = line_at_position(source, position.0) else {
        return report;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    report.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    report.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    report.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    report
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.len() - string.trim_start_matches([' ', '\t']).len();

    (String::from(&string[start..]), start)
}
