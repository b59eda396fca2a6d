#![allow(clippy::module_inception)]

use crate::errors::errors::ErrorTip;

pub mod errors;
pub mod lexer;
pub mod macros;

pub use crate::errors::errors::{Diagnostic, DiagnosticKind};
pub use crate::lexer::lexer::{tokenize, TokenStream, Tokenizer};
pub use crate::lexer::tokens::{Keyword, Token, TokenKind, TokenValue};

/// A location in the source text. `offset` is a byte offset, `line` and
/// `column` are 1-based, `column` counts characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The slice of `source` this span covers, if it lies within it.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start.offset..self.end.offset)
    }
}

/// Finds the line containing the byte `offset`, returning the 1-based line
/// number, the line text and the offset within that line.
pub fn get_line_at_position(source: &str, offset: usize) -> Option<(usize, String, usize)> {
    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&offset) {
            return Some((line_number, line.to_string(), offset - start));
        }

        start = end;
        line_number += 1;
    }

    // Offsets at the very end of the input point just past the last line.
    if offset == source.len() {
        if source.is_empty() || source.ends_with('\n') {
            return Some((line_number, String::new(), 0));
        }
        let last = source.rsplit('\n').next().unwrap_or("");
        return Some((line_number - 1, last.to_string(), last.len()));
    }

    None
}

pub fn render_diagnostic(diagnostic: &Diagnostic, source: &str, name: &str) -> String {
    /*
        error: message
        -> query.sql
           |
        20 | SELECT @ FROM t;
           | -------^
    */

    let mut out = String::new();

    if let ErrorTip::None = diagnostic.get_tip() {
        out.push_str(&format!("Error: {}\n", diagnostic));
    } else {
        out.push_str(&format!("Error: {} ({})\n", diagnostic, diagnostic.get_tip()));
    }
    out.push_str(&format!("-> {}\n", name));

    let Some((line, line_text, line_pos)) =
        get_line_at_position(source, diagnostic.get_position().offset)
    else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!(
        "{} | {}\n",
        line_string,
        line_text_removed.trim_end()
    ));

    let column = line_text[..line_pos].chars().count();
    let arrows = column.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

/// Strips leading blanks, returning the rest and how many were removed.
fn remove_starting_whitespace(line: &str) -> (&str, usize) {
    let trimmed = line.trim_start_matches([' ', '\t']);
    (trimmed, line.len() - trimmed.len())
}
