//! Utility macros for the tokenizer.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance with no error attached.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$position` - The `Position` of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Operator, String::from("+"), Position::new(1, 1));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {{
        let position: $crate::Position = $position;
        $crate::lexer::tokens::Token {
            kind: $kind,
            line: position.line,
            column: position.column,
            value: $value,
            error: None,
        }
    }};
}
