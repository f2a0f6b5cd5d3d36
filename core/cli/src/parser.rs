//! Command line argument parsing for the AST round-trip tool.
//!
//! This module defines the CLI interface using `clap`. The `Cli` struct
//! captures all command line flags and arguments passed to the `jackast`
//! binary.

use clap::Parser;

/// Command line interface definition for the AST round-trip tool.
///
/// `jackast` reads one AST XML document, rebuilds the tree through the
/// library's validating constructors, and re-emits it. It is the hand-off
/// checker between compiler phases that exchange trees as XML.
///
/// ## Examples
///
/// Pretty-print a document from a file:
/// ```bash
/// jackast parsed.xml
/// ```
///
/// Validate a phase's output on a pipe without re-emitting:
/// ```bash
/// parser Main.jack | jackast --check
/// ```
#[derive(Parser)]
#[command(
    name = "jackast",
    author,
    version,
    about = "Jack AST XML round-trip tool",
    long_about = "Reads an abstract syntax tree serialized as XML, validates it by rebuilding \
every node through the library's checked constructors, and re-emits it pretty-printed or compact. \
Reads standard input when no file is given."
)]
pub(crate) struct Cli {
    /// Path to the AST XML document. Standard input is read when omitted.
    pub(crate) file: Option<std::path::PathBuf>,

    /// Spaces per nesting level in the re-emitted document.
    #[clap(long = "indent", default_value_t = 2, conflicts_with = "compact")]
    pub(crate) indent: usize,

    /// Emit the document on a single line with no indentation.
    ///
    /// Compact and indented output parse back to the same tree; this form
    /// suits piping between phases.
    #[clap(long = "compact", action = clap::ArgAction::SetTrue)]
    pub(crate) compact: bool,

    /// Validate the document and stop without re-emitting it.
    ///
    /// A structurally invalid document is reported to stderr and the process
    /// exits with code 1.
    #[clap(long = "check", action = clap::ArgAction::SetTrue)]
    pub(crate) check: bool,
}
