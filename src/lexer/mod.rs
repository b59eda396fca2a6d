//! Lexical analysis of SQL statements.
//!
//! This module turns query text into a sequence of tokens. It handles:
//!
//! - Ordered, longest-match dispatch over a fixed rule table
//! - Keyword recognition as a classification of identifier-shaped words
//! - Integer and single-quoted string literals
//! - Line tracking for diagnostics
//! - Skipping whitespace, `--` line comments and `/* */` block comments
//! - Recovery from illegal characters without aborting the scan

pub mod lexer;
pub mod rules;
pub mod tokens;
