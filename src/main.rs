//! wordcount - A single-stage batch job that counts words
//!
//! wordcount provides:
//! - Materialization of seed files into a working input directory
//! - Line loading, text normalization and whitespace tokenization
//! - Word frequency aggregation with stable tie ordering
//! - A tab-separated report plus a `_SUCCESS` marker

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod pipeline;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
