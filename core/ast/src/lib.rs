#![warn(clippy::pedantic)]
//! Arena-indexed, immutable abstract syntax trees for the Jack toolchain.
//!
//! All nodes live in a [`NodeStore`](arena::NodeStore) and are addressed by
//! opaque [`Ast`](arena::Ast) and [`Ann`](arena::Ann) handles. Trees are built
//! bottom-up through the `create_*` constructors, read through the `get_*` /
//! `size_of_*` accessors, and exchanged between tool phases as XML.
//!
//! Handle misuse (wrong node kind, out-of-range index, a handle that was never
//! issued by the store) is a programming error and panics with a message naming
//! the expected and actual kinds; in the shipped binaries this terminates the
//! process with a non-zero status. Malformed XML input is environmental and is
//! reported as [`AstError`](errors::AstError) instead.
pub mod access;
pub mod ann;
pub mod arena;
pub mod builder;
pub mod errors;
pub mod kind;
pub(crate) mod nodes;
pub mod xml;

pub use arena::{Ann, Ast, NodeStore};
pub use builder::{INFIX_OPS, UNARY_OPS};
pub use errors::AstError;
pub use kind::AstKind;
