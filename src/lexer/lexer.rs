use std::rc::Rc;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Called with the length in bytes of the text its pattern matched.
pub type RegexHandler = fn(&mut Lexer, usize);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(&format!("^(?:{})", regex)).expect("token pattern must compile"),
        handler,
    }
}

lazy_static! {
    // Two-character operators come before their one-character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern("[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        pattern("[0-9]+", number_handler),
        pattern("\\s+", skip_handler),
        pattern("\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        pattern("\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        pattern("\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        pattern("\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        pattern("==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        pattern("!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        pattern("!", MK_DEFAULT_HANDLER!(TokenKind::Not, "!")),
        pattern("=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        pattern("<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        pattern(">", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        pattern(";", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        pattern(",", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        pattern("\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        pattern("-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        pattern("/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        pattern("\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span covering the next `len` bytes.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    fn matched_text(&self, len: usize) -> String {
        String::from(&self.remainder()[..len])
    }

    fn illegal(&mut self) {
        // at_eof was checked by the caller, so there is a next char
        let Some(ch) = self.remainder().chars().next() else {
            return;
        };

        debug!("illegal character {:?} at {}:{}", ch, self.file, self.pos);

        let span = self.span_of(ch.len_utf8());
        self.push(MK_TOKEN!(TokenKind::Illegal, ch.to_string(), span));
        self.advance_n(ch.len_utf8());
    }
}

fn number_handler(lexer: &mut Lexer, len: usize) {
    let matched = lexer.matched_text(len);
    let span = lexer.span_of(len);

    lexer.push(MK_TOKEN!(TokenKind::Integer, matched, span));
    lexer.advance_n(len);
}

fn skip_handler(lexer: &mut Lexer, len: usize) {
    lexer.advance_n(len);
}

fn symbol_handler(lexer: &mut Lexer, len: usize) {
    let value = lexer.matched_text(len);
    let span = lexer.span_of(len);

    if let Some(kind) = RESERVED_LOOKUP.get(value.as_str()) {
        lexer.push(MK_TOKEN!(*kind, value, span));
    } else {
        lexer.push(MK_TOKEN!(TokenKind::Identifier, value, span));
    }

    lexer.advance_n(len);
}

/// Scans `source` into tokens, always ending with a single EOF token.
///
/// Lexing never fails: characters no pattern accepts become `Illegal`
/// tokens for the parser to report.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let found = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(lex.remainder())
                .map(|m| (pattern.handler, m.end()))
        });

        match found {
            Some((handler, len)) if len > 0 => handler(&mut lex, len),
            _ => lex.illegal(),
        }
    }

    let span = lex.span_of(0);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), span));
    lex.tokens
}
