//! Checksum verification entrypoint.

mod algorithm;
mod clipboard;
mod error;
mod hasher;
mod paths;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use crate::algorithm::{Algorithm, DEFAULT_ALGORITHM};
use crate::hasher::Hasher;

/// CLI arguments for the checksum verifier.
#[derive(Parser, Debug)]
#[command(
    name = "hashcheck",
    version,
    about = "Hash a file and compare it against a known-good digest"
)]
struct Args {
    /// File to hash
    test: PathBuf,

    /// Expected hash (defaults to the clipboard contents)
    source: Option<String>,

    /// Digest algorithm
    #[arg(
        short,
        long,
        value_name = "NAME",
        default_value = DEFAULT_ALGORITHM.name()
    )]
    algorithm: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    run(args)
}

/// Hash the test file, compare against the source digest, report the verdict.
fn run(args: Args) -> Result<()> {
    let algorithm: Algorithm = args.algorithm.parse()?;

    let source = match args.source {
        Some(hash) => Hasher::new(hash, algorithm),
        None => {
            let pasted = clipboard::read_text().context("read expected hash from clipboard")?;
            Hasher::new(pasted, algorithm)
        }
    };
    let test = Hasher::from_file(&args.test, algorithm)?;

    // A mismatch is a normal result, not an error: exit code stays 0.
    let matched = source == test;
    let verdict = if matched { "TRUE" } else { "FALSE" };
    let line = format!("[{}] {source} == {test}: {verdict}", test.algorithm());
    if matched {
        println!("{}", line.green());
    } else {
        println!("{}", line.red());
    }
    Ok(())
}
