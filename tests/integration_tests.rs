//! Integration tests for the public tokenizer API.
//!
//! These tests drive whole statements through `tokenize` and `Tokenizer`
//! and check the resulting token kinds, values and diagnostics.

use sql_lexer::{tokenize, DiagnosticKind, Keyword, TokenKind, Tokenizer};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).iter().map(|t| t.kind).collect()
}

#[test]
fn test_select_statement() {
    let tokens = tokenize("SELECT * FROM users;");

    assert_eq!(
        kinds("SELECT * FROM users;"),
        vec![
            TokenKind::Keyword(Keyword::Select),
            TokenKind::Asterisk,
            TokenKind::Keyword(Keyword::From),
            TokenKind::Identifier,
            TokenKind::Semicolon,
        ]
    );
    assert_eq!(tokens[0].value, "SELECT");
    assert_eq!(tokens[1].value, "*");
    assert_eq!(tokens[3].value, "users");
    assert_eq!(tokens[4].value, ";");
}

#[test]
fn test_where_clause() {
    let tokens = tokenize("WHERE age >= 18 AND name != 'Bob';");

    let rendered: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "KEYWORD: WHERE",
            "IDENTIFIER: age",
            "GREATER_EQUAL: >=",
            "INTEGER: 18",
            "KEYWORD: AND",
            "IDENTIFIER: name",
            "NOT_EQUAL: !=",
            "STRING: Bob",
            "SEMICOLON: ;",
        ]
    );
    assert_eq!(tokens[3].value.as_integer(), Some(18));
}

#[test]
fn test_insert_statement() {
    assert_eq!(
        kinds("INSERT INTO users (id, name) VALUES (1, 'Ann');"),
        vec![
            TokenKind::Keyword(Keyword::Insert),
            TokenKind::Keyword(Keyword::Into),
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::Keyword(Keyword::Values),
            TokenKind::OpenParen,
            TokenKind::Integer,
            TokenKind::Comma,
            TokenKind::String,
            TokenKind::CloseParen,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_multi_line_query_with_comments() {
    let source = "-- fetch adults\n\
                  SELECT name\n\
                  FROM users /* primary table */\n\
                  WHERE age > 17 -- inclusive\n\
                  ORDER BY name;";
    let stream = Tokenizer::new().tokenize(source);

    assert!(stream.is_clean());
    assert_eq!(stream.tokens.len(), 12);
    assert_eq!(stream.tokens[0].line(), 2);
    assert_eq!(stream.tokens[2].line(), 3);
    assert_eq!(stream.tokens[4].line(), 4);
    assert_eq!(stream.tokens[9].kind, TokenKind::Keyword(Keyword::By));
    assert_eq!(stream.tokens[11].line(), 5);
}

#[test]
fn test_illegal_character_recovery() {
    let stream = Tokenizer::new().tokenize("a @ b");

    assert_eq!(stream.kinds(), vec![TokenKind::Identifier, TokenKind::Identifier]);
    assert_eq!(stream.diagnostics.len(), 1);
    assert_eq!(
        stream.diagnostics[0].to_string(),
        "Illegal character '@' at line 1"
    );
    assert!(!stream.is_clean());

    // The plain entry point returns the same tokens without the diagnostics.
    assert_eq!(tokenize("a @ b"), stream.tokens);
}

#[test]
fn test_diagnostic_lines() {
    let stream = Tokenizer::new().tokenize("SELECT $\nFROM t\nWHERE x = ?;");

    let lines: Vec<u32> = stream.diagnostics.iter().map(|d| d.line()).collect();
    assert_eq!(lines, vec![1, 3]);
    assert_eq!(
        stream.diagnostics[1].kind(),
        &DiagnosticKind::IllegalCharacter { character: '?' }
    );
    assert_eq!(stream.tokens.len(), 7);
}

#[test]
fn test_empty_input() {
    let stream = Tokenizer::new().tokenize("");

    assert!(stream.tokens.is_empty());
    assert!(stream.is_clean());
}

#[test]
fn test_spans_partition_input() {
    let source = "SELECT a,b -- c\nFROM t WHERE x<=5 AND s='q' # ;";
    let stream = Tokenizer::new().tokenize(source);

    // Tokens appear in source order and never overlap.
    for pair in stream.tokens.windows(2) {
        assert!(pair[0].span.end.offset <= pair[1].span.start.offset);
    }

    // Whatever falls between tokens is trivia or a reported character.
    let mut cursor = 0;
    let mut gaps = String::new();
    for token in &stream.tokens {
        gaps.push_str(&source[cursor..token.span.start.offset]);
        cursor = token.span.end.offset;
    }
    gaps.push_str(&source[cursor..]);

    let leftover: String = gaps
        .replace("-- c", "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    assert_eq!(leftover, "#");
    assert_eq!(stream.diagnostics.len(), 1);
}

#[test]
fn test_reserialized_tokens_round_trip() {
    let sources = [
        "SELECT * FROM users;",
        "WHERE age>=18 AND name!='Bob';",
        "create table t(id int primary key,label varchar(20) unique)",
        "UPDATE t SET v = 'a b' WHERE id<>3",
    ];

    for source in sources {
        let tokens = tokenize(source);
        let joined = tokens
            .iter()
            .map(|t| t.to_sql())
            .collect::<Vec<_>>()
            .join(" ");
        let relexed = tokenize(&joined);

        let before: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        let after: Vec<TokenKind> = relexed.iter().map(|t| t.kind).collect();
        assert_eq!(before, after, "kinds changed for {:?}", source);

        let values_before: Vec<_> = tokens.iter().map(|t| t.value.clone()).collect();
        let values_after: Vec<_> = relexed.iter().map(|t| t.value.clone()).collect();
        assert_eq!(values_before, values_after);
    }
}

#[test]
fn test_concurrent_tokenize() {
    let tokenizer = Tokenizer::new();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let source = format!("SELECT c{} FROM t{} WHERE n = {};", i, i, i);
                tokenizer.tokenize(&source)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let stream = handle.join().unwrap();
        assert!(stream.is_clean());
        assert_eq!(stream.tokens.len(), 9);
        assert_eq!(stream.tokens[7].value.as_integer(), Some(i as i64));
    }
}
