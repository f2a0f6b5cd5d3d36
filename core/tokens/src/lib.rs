//! Pull-based tokeniser for Jack source text.
//!
//! [`Tokenizer`] hands out one [`Token`] per call, skipping whitespace and
//! both comment forms, and returns an end-of-input token forever once the
//! source is exhausted. Lexical failures are typed [`LexError`] values with
//! the offending position; [`Tokenizer::context`] renders the source line
//! with a caret for diagnostics.

#![warn(clippy::pedantic)]

mod errors;
mod lexer;
mod token;

pub use errors::LexError;
pub use lexer::Tokenizer;
pub use token::{Token, TokenKind};
