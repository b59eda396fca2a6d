use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A non-fatal problem found while scanning. The scan records it, reports it
/// to the log and carries on with the next character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    internal_error: DiagnosticKind,
    position: Position,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, position: Position) -> Self {
        Diagnostic {
            internal_error: kind,
            position,
        }
    }

    pub fn kind(&self) -> &DiagnosticKind {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            DiagnosticKind::IllegalCharacter { .. } => "IllegalCharacter",
            DiagnosticKind::UnterminatedString => "UnterminatedString",
            DiagnosticKind::UnterminatedComment => "UnterminatedComment",
            DiagnosticKind::IntegerOutOfRange { .. } => "IntegerOutOfRange",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            DiagnosticKind::IllegalCharacter { character } => match character {
                '"' => ErrorTip::Suggestion(String::from(
                    "String literals use single quotes, e.g. 'Bob'",
                )),
                '!' => ErrorTip::Suggestion(String::from("Did you mean `!=`?")),
                '/' => ErrorTip::Suggestion(String::from("Comments start with `--` or `/*`")),
                c if c.is_control() => ErrorTip::None,
                c => ErrorTip::Suggestion(format!("`{}` is not valid here, remove it", c)),
            },
            DiagnosticKind::UnterminatedString => ErrorTip::Suggestion(String::from(
                "Unterminated string literal, close it with a single quote",
            )),
            DiagnosticKind::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Block comments must be closed with `*/`"))
            }
            DiagnosticKind::IntegerOutOfRange { literal } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                literal
            )),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at line {}", self.internal_error, self.position.line)
    }
}

impl std::error::Error for Diagnostic {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    #[error("Illegal character '{character}'")]
    IllegalCharacter { character: char },
    #[error("Illegal character '\''")]
    UnterminatedString,
    #[error("Unterminated block comment")]
    UnterminatedComment,
    #[error("Integer literal '{literal}' out of range")]
    IntegerOutOfRange { literal: String },
}
