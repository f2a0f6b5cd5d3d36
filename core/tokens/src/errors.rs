use thiserror::Error;

/// Lexical errors, each carrying the 1-based source position.
#[derive(Debug, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum LexError {
    /// A character that cannot start any token.
    #[error("unexpected character `{ch}` at {line}:{column}")]
    UnexpectedChar { ch: char, line: u32, column: u32 },

    /// A string constant left open at the end of its line or of the input.
    #[error("unterminated string constant at {line}:{column}")]
    UnterminatedString { line: u32, column: u32 },

    /// A `/*` comment left open at the end of the input.
    #[error("unterminated comment at {line}:{column}")]
    UnterminatedComment { line: u32, column: u32 },

    /// An integer constant outside the Jack word range.
    #[error("integer constant `{text}` out of range at {line}:{column}")]
    IntegerOutOfRange { text: String, line: u32, column: u32 },
}
