use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Keyword spellings, keyed by their uppercase form.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        for keyword in Keyword::ALL {
            map.insert(keyword.as_str(), keyword);
        }
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Select,
    Update,
    Create,
    Drop,
    Table,
    Order,
    By,
    From,
    Insert,
    Into,
    Values,
    Where,
    And,
    Or,
    Join,
    On,
    Null,
    Int,
    Not,
    Datetime,
    Primary,
    Key,
    Char,
    Identity,
    Varchar,
    Alter,
    Foreign,
    Add,
    Constraint,
    Unique,
}

impl Keyword {
    pub const ALL: [Keyword; 30] = [
        Keyword::Select,
        Keyword::Update,
        Keyword::Create,
        Keyword::Drop,
        Keyword::Table,
        Keyword::Order,
        Keyword::By,
        Keyword::From,
        Keyword::Insert,
        Keyword::Into,
        Keyword::Values,
        Keyword::Where,
        Keyword::And,
        Keyword::Or,
        Keyword::Join,
        Keyword::On,
        Keyword::Null,
        Keyword::Int,
        Keyword::Not,
        Keyword::Datetime,
        Keyword::Primary,
        Keyword::Key,
        Keyword::Char,
        Keyword::Identity,
        Keyword::Varchar,
        Keyword::Alter,
        Keyword::Foreign,
        Keyword::Add,
        Keyword::Constraint,
        Keyword::Unique,
    ];

    /// The canonical (uppercase) spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Select => "SELECT",
            Keyword::Update => "UPDATE",
            Keyword::Create => "CREATE",
            Keyword::Drop => "DROP",
            Keyword::Table => "TABLE",
            Keyword::Order => "ORDER",
            Keyword::By => "BY",
            Keyword::From => "FROM",
            Keyword::Insert => "INSERT",
            Keyword::Into => "INTO",
            Keyword::Values => "VALUES",
            Keyword::Where => "WHERE",
            Keyword::And => "AND",
            Keyword::Or => "OR",
            Keyword::Join => "JOIN",
            Keyword::On => "ON",
            Keyword::Null => "NULL",
            Keyword::Int => "INT",
            Keyword::Not => "NOT",
            Keyword::Datetime => "DATETIME",
            Keyword::Primary => "PRIMARY",
            Keyword::Key => "KEY",
            Keyword::Char => "CHAR",
            Keyword::Identity => "IDENTITY",
            Keyword::Varchar => "VARCHAR",
            Keyword::Alter => "ALTER",
            Keyword::Foreign => "FOREIGN",
            Keyword::Add => "ADD",
            Keyword::Constraint => "CONSTRAINT",
            Keyword::Unique => "UNIQUE",
        }
    }

    /// Case-insensitive lookup of an identifier-shaped word.
    pub fn lookup(word: &str) -> Option<Keyword> {
        // CONSTRAINT is the longest keyword.
        if word.len() > 10 {
            return None;
        }
        RESERVED_LOOKUP.get(word.to_ascii_uppercase().as_str()).copied()
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword(Keyword),
    Identifier,
    Integer,
    String,

    Asterisk,
    Comma,
    Semicolon,
    OpenParen,
    CloseParen,

    Equals,       // =
    Less,         // <
    Greater,      // >
    LessEqual,    // <=
    GreaterEqual, // >=
    NotEqual,     // !=
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Keyword(_) => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Integer => "INTEGER",
            TokenKind::String => "STRING",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::Equals => "EQUALS",
            TokenKind::Less => "LESS",
            TokenKind::Greater => "GREATER",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::NotEqual => "NOT_EQUAL",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TokenValue {
    Text(String),
    Integer(i64),
}

impl TokenValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(text) => Some(text),
            TokenValue::Integer(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            TokenValue::Integer(value) => Some(*value),
            TokenValue::Text(_) => None,
        }
    }
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Text(text) => write!(f, "{}", text),
            TokenValue::Integer(value) => write!(f, "{}", value),
        }
    }
}

impl PartialEq<&str> for TokenValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

impl PartialEq<i64> for TokenValue {
    fn eq(&self, other: &i64) -> bool {
        self.as_integer() == Some(*other)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.value)
    }
}

impl Token {
    /// 1-based line the token starts on.
    pub fn line(&self) -> u32 {
        self.span.start.line
    }

    /// Source text that lexes back into a token of the same kind and value.
    pub fn to_sql(&self) -> String {
        match (&self.kind, &self.value) {
            (TokenKind::String, value) => format!("'{}'", value),
            (_, value) => value.to_string(),
        }
    }
}
