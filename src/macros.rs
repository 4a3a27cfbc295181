//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance at a given line and column

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's text, anything convertible into a `String`
/// * `$line` - 1-based line of the token's first character
/// * `$column` - 1-based column of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42", 1, 9);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $line:expr, $column:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: ::std::string::String::from($value),
            line: $line,
            column: $column,
        }
    };
}
