//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SYMBOL_RULE!` - Creates a rule matching one fixed operator or punctuation symbol
//!
//! These macros keep the rule table in `lexer::rules` down to one line per symbol.

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, TokenValue::Integer(42), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a rule for a fixed symbol.
///
/// The rule matches when the remaining input starts with `$value` and emits a
/// token of `$kind` holding the symbol text.
///
/// # Example
///
/// ```ignore
/// MK_SYMBOL_RULE!(TokenKind::LessEqual, "<=")
/// ```
#[macro_export]
macro_rules! MK_SYMBOL_RULE {
    ($kind:expr, $value:literal) => {
        $crate::lexer::rules::Rule {
            name: $value,
            matcher: |rest: &str| {
                if rest.starts_with($value) {
                    Some($value.len())
                } else {
                    None
                }
            },
            handler: |lexer: &mut $crate::lexer::lexer::Lexer<'_>, len: usize| {
                lexer.push_token(
                    $kind,
                    $crate::lexer::tokens::TokenValue::Text(String::from($value)),
                    len,
                );
            },
        }
    };
}
