use crate::{
    errors::errors::{Diagnostic, DiagnosticKind},
    Position, Span, MK_TOKEN,
};

use super::{
    rules::{RuleTable, RULES},
    tokens::{Token, TokenKind, TokenValue},
};

/// Scanner state for a single pass over one input string.
pub struct Lexer<'a> {
    rules: &'a RuleTable,
    source: &'a str,
    pos: Position,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Lexer<'a> {
    pub fn new(rules: &'a RuleTable, source: &'a str) -> Lexer<'a> {
        Lexer {
            rules,
            source,
            pos: Position::start(),
            tokens: vec![],
            diagnostics: vec![],
        }
    }

    /// Advances over `n` bytes, keeping the line and column in step.
    pub fn advance_n(&mut self, n: usize) {
        let consumed = &self.source[self.pos.offset..self.pos.offset + n];
        for c in consumed.chars() {
            if c == '\n' {
                self.pos.line += 1;
                self.pos.column = 1;
            } else {
                self.pos.column += 1;
            }
        }
        self.pos.offset += n;
    }

    /// Emits a token for the next `len` bytes and moves past them.
    pub fn push_token(&mut self, kind: TokenKind, value: TokenValue, len: usize) {
        let start = self.pos;
        self.advance_n(len);
        let token = MK_TOKEN!(kind, value, Span { start, end: self.pos });
        self.tokens.push(token);
    }

    /// Records a diagnostic at the current position without moving.
    pub fn note(&mut self, kind: DiagnosticKind) {
        let diagnostic = Diagnostic::new(kind, self.pos);
        log::warn!(target: "sql", "{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    /// Records a diagnostic at the current position and moves past the
    /// offending `len` bytes.
    pub fn report(&mut self, kind: DiagnosticKind, len: usize) {
        self.note(kind);
        self.advance_n(len);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos.offset..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos.offset >= self.source.len()
    }

    fn run(&mut self) {
        let rules = self.rules;

        while let Some(c) = self.at() {
            match rules.match_at(self.remainder()) {
                Some((rule, len)) => (rule.handler)(self, len),
                None => self.report(DiagnosticKind::IllegalCharacter { character: c }, c.len_utf8()),
            }
        }
    }

    fn finish(self) -> TokenStream {
        TokenStream {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }
}

pub fn skip_handler(lexer: &mut Lexer<'_>, len: usize) {
    lexer.advance_n(len);
}

pub fn block_comment_handler(lexer: &mut Lexer<'_>, len: usize) {
    let comment = &lexer.remainder()[..len];

    if comment.len() >= 4 && comment.ends_with("*/") {
        lexer.advance_n(len);
    } else {
        // Only the `/*` opener: report it and lex what follows normally.
        lexer.report(DiagnosticKind::UnterminatedComment, len);
    }
}

pub fn identifier_handler(lexer: &mut Lexer<'_>, len: usize) {
    let word = &lexer.remainder()[..len];
    let kind = lexer.rules.classify_word(word);

    lexer.push_token(kind, TokenValue::Text(String::from(word)), len);
}

pub fn integer_handler(lexer: &mut Lexer<'_>, len: usize) {
    let digits = &lexer.remainder()[..len];

    match digits.parse::<i64>() {
        Ok(value) => lexer.push_token(TokenKind::Integer, TokenValue::Integer(value), len),
        Err(_) => {
            // Still an integer token, it just keeps its digits as text.
            lexer.note(DiagnosticKind::IntegerOutOfRange {
                literal: String::from(digits),
            });
            lexer.push_token(TokenKind::Integer, TokenValue::Text(String::from(digits)), len);
        }
    }
}

pub fn string_handler(lexer: &mut Lexer<'_>, len: usize) {
    if len < 2 {
        // Only the opening quote: report it and lex what follows normally.
        lexer.report(DiagnosticKind::UnterminatedString, len);
        return;
    }

    let contents = &lexer.remainder()[1..len - 1];
    lexer.push_token(TokenKind::String, TokenValue::Text(String::from(contents)), len);
}

/// The result of one scan: every recognised token, plus a diagnostic for each
/// stretch of input that could not be tokenized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

impl TokenStream {
    /// True when the scan produced no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|token| token.kind).collect()
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

/// Entry point of the lexer. Holds the shared, immutable rule table, so it is
/// free to copy and to use from several threads at once.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    rules: &'static RuleTable,
}

impl Tokenizer {
    pub fn new() -> Tokenizer {
        Tokenizer { rules: &RULES }
    }

    pub fn tokenize(&self, source: &str) -> TokenStream {
        let mut lex = Lexer::new(self.rules, source);
        lex.run();

        log::debug!(
            target: "sql",
            "Tokenized {} bytes into {} tokens ({} diagnostics)",
            source.len(),
            lex.tokens.len(),
            lex.diagnostics.len()
        );

        lex.finish()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::new()
    }
}

/// Tokenizes `source`, returning only the recognised tokens. Diagnostics
/// still go to the log; use [`Tokenizer::tokenize`] to get them back as values.
pub fn tokenize(source: &str) -> Vec<Token> {
    Tokenizer::new().tokenize(source).into_tokens()
}
