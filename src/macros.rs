//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! This keeps the dispatch table in the lexer down to one line per token.

/// Creates a Token instance.
///
/// The two-argument form builds a token without a literal value, the
/// three-argument form wraps the given `Literal` in `Some`.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The exact source text of the token
/// * `$literal` - The literal value (optional)
/// * `$line` - The line the token was finished on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42", Literal::Number(42.0); 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr; $line:expr) => {
        Token {
            kind: $kind,
            lexeme: String::from($lexeme),
            literal: None,
            line: $line,
        }
    };
    ($kind:expr, $lexeme:expr, $literal:expr; $line:expr) => {
        Token {
            kind: $kind,
            lexeme: String::from($lexeme),
            literal: Some($literal),
            line: $line,
        }
    };
}
