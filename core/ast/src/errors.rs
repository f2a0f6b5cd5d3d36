//! Error types for the XML codec.
//!
//! Handle misuse panics (see the crate docs); only environmental failures
//! such as malformed input documents and I/O surface as values.

use thiserror::Error;

/// Errors produced while emitting or parsing the XML tree representation.
#[derive(Debug, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum AstError {
    /// An element tag that names no registered node kind.
    #[error("unknown element `{tag}` at {line}:{column}")]
    UnknownTag {
        tag: String,
        line: u64,
        column: u64,
    },

    /// Structurally invalid nesting: wrong child count, a child of a kind
    /// outside its slot's contract, stray text, or a missing attribute.
    #[error("malformed tree document at {line}:{column}: {detail}")]
    Malformed {
        detail: String,
        line: u64,
        column: u64,
    },

    /// The underlying XML reader rejected the input.
    #[error("XML syntax error: {0}")]
    Syntax(#[from] xml::reader::Error),

    /// The underlying XML writer failed, usually on the output stream.
    #[error("XML emission failed: {0}")]
    Emit(#[from] xml::writer::Error),
}
