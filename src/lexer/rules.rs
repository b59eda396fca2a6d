//! The lexical rule table.
//!
//! Rules are tried in the order they appear in [`RuleTable::new`] and the
//! first one that matches at the current position wins. Trivia comes first,
//! then two-character symbols ahead of their one-character prefixes, then the
//! identifier, integer and string patterns. Each pattern takes the longest run
//! it can.

use std::fmt::Debug;

use lazy_static::lazy_static;

use crate::MK_SYMBOL_RULE;

use super::{
    lexer::{
        block_comment_handler, identifier_handler, integer_handler, skip_handler, string_handler,
        Lexer,
    },
    tokens::{Keyword, TokenKind},
};

/// Returns the length in bytes of the match at the start of the input, if any.
/// A matcher never reports an empty match.
pub type Matcher = fn(&str) -> Option<usize>;

pub type RuleHandler = fn(&mut Lexer<'_>, usize);

#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub matcher: Matcher,
    pub handler: RuleHandler,
}

impl Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

lazy_static! {
    pub static ref RULES: RuleTable = RuleTable::new();
}

#[derive(Debug)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new() -> RuleTable {
        RuleTable {
            rules: vec![
                Rule { name: "whitespace", matcher: match_whitespace, handler: skip_handler },
                Rule { name: "newline", matcher: match_newlines, handler: skip_handler },
                Rule { name: "line comment", matcher: match_line_comment, handler: skip_handler },
                Rule { name: "block comment", matcher: match_block_comment, handler: block_comment_handler },
                MK_SYMBOL_RULE!(TokenKind::LessEqual, "<="),
                MK_SYMBOL_RULE!(TokenKind::GreaterEqual, ">="),
                MK_SYMBOL_RULE!(TokenKind::NotEqual, "!="),
                MK_SYMBOL_RULE!(TokenKind::Asterisk, "*"),
                MK_SYMBOL_RULE!(TokenKind::Comma, ","),
                MK_SYMBOL_RULE!(TokenKind::Semicolon, ";"),
                MK_SYMBOL_RULE!(TokenKind::Equals, "="),
                MK_SYMBOL_RULE!(TokenKind::Less, "<"),
                MK_SYMBOL_RULE!(TokenKind::Greater, ">"),
                MK_SYMBOL_RULE!(TokenKind::OpenParen, "("),
                MK_SYMBOL_RULE!(TokenKind::CloseParen, ")"),
                Rule { name: "identifier", matcher: match_identifier, handler: identifier_handler },
                Rule { name: "integer", matcher: match_integer, handler: integer_handler },
                Rule { name: "string", matcher: match_string, handler: string_handler },
            ],
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Finds the first rule matching at the start of `rest`, with its length.
    pub fn match_at(&self, rest: &str) -> Option<(&Rule, usize)> {
        self.rules
            .iter()
            .find_map(|rule| (rule.matcher)(rest).map(|len| (rule, len)))
    }

    /// Classifies an identifier-shaped word. Only called on the full word, so
    /// a keyword that is merely a prefix (`SELECTOR`) stays an identifier.
    pub fn classify_word(&self, word: &str) -> TokenKind {
        match Keyword::lookup(word) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier,
        }
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        RuleTable::new()
    }
}

fn run_length(rest: &str, accept: impl Fn(u8) -> bool) -> usize {
    rest.bytes().take_while(|b| accept(*b)).count()
}

fn non_empty(len: usize) -> Option<usize> {
    if len > 0 {
        Some(len)
    } else {
        None
    }
}

pub fn match_whitespace(rest: &str) -> Option<usize> {
    non_empty(run_length(rest, |b| matches!(b, b' ' | b'\t' | b'\r')))
}

pub fn match_newlines(rest: &str) -> Option<usize> {
    non_empty(run_length(rest, |b| b == b'\n'))
}

/// `--` up to, but not including, the end of the line.
pub fn match_line_comment(rest: &str) -> Option<usize> {
    if !rest.starts_with("--") {
        return None;
    }
    Some(rest.find('\n').unwrap_or(rest.len()))
}

/// `/* ... */`. An opener that is never closed matches just the `/*`,
/// which the handler reports.
pub fn match_block_comment(rest: &str) -> Option<usize> {
    if !rest.starts_with("/*") {
        return None;
    }
    match rest[2..].find("*/") {
        Some(end) => Some(end + 4),
        None => Some(2),
    }
}

pub fn match_identifier(rest: &str) -> Option<usize> {
    match rest.bytes().next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {
            Some(run_length(rest, |b| b.is_ascii_alphanumeric() || b == b'_'))
        }
        _ => None,
    }
}

pub fn match_integer(rest: &str) -> Option<usize> {
    non_empty(run_length(rest, |b| b.is_ascii_digit()))
}

/// A quoted string including both quotes. An opening quote with no closing
/// quote matches just the quote itself, which the handler reports.
pub fn match_string(rest: &str) -> Option<usize> {
    if !rest.starts_with('\'') {
        return None;
    }
    match rest[1..].find('\'') {
        Some(end) => Some(end + 2),
        None => Some(1),
    }
}
