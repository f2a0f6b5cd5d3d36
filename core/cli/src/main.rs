#![warn(clippy::pedantic)]

//! # Jack AST round-trip CLI
//!
//! Reads one AST XML document (from a file argument or standard input),
//! rebuilds the tree through the library's validating constructors, and
//! either stops after validation (`--check`) or re-emits the document on
//! stdout, pretty-printed at `--indent` spaces (default 2) or `--compact`.
//!
//! ## Exit codes
//! * 0 – the document is a well-formed tree.
//! * 1 – usage / IO / validation failure.

mod parser;

use std::io::{Read, Write};
use std::{fs, io, process};

use anyhow::Context;
use clap::Parser;
use jackc_ast::NodeStore;
use parser::Cli;

fn main() {
    let args = Cli::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: &Cli) -> anyhow::Result<()> {
    let (source, origin) = match &args.file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            (text, path.display().to_string())
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading standard input")?;
            (text, "<stdin>".to_string())
        }
    };

    let mut store = NodeStore::new();
    let root = store
        .parse_xml_str(&source)
        .with_context(|| format!("parsing {origin}"))?;

    if args.check {
        println!("Parsed: {origin}");
        return Ok(());
    }

    let indent = if args.compact { 0 } else { args.indent };
    let mut document = Vec::new();
    store.print_as_xml(root, indent, &mut document)?;
    document.push(b'\n');
    io::stdout()
        .write_all(&document)
        .context("writing standard output")?;
    Ok(())
}
