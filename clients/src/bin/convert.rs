//! `inventors-convert` — reads the (inventor, invention) table and writes the
//! Turtle graph artifact.
//!
//! **Output:** one Turtle document with a `wdt:P800` triple per input row.
//!
//! **Usage:**
//! ```
//! inventors-convert [--input <path>] [--output <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use inventors_graph::{convert, Config};

/// Convert an (inventor, invention) CSV table to a Turtle RDF document.
#[derive(Parser)]
#[command(
    name = "inventors-convert",
    about = "Convert an (inventor, invention) CSV table to Turtle"
)]
struct Args {
    /// Path to the input table. The header must contain `inventor` and
    /// `invention` columns.
    #[arg(long, default_value = "data/inventors_inventions.csv")]
    input: PathBuf,

    /// Destination path for the Turtle document.
    #[arg(long, default_value = "data/inventors_graph.ttl")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    let config = Config {
        input: args.input,
        output: args.output,
    };
    let report = convert(&config)
        .with_context(|| format!("Failed to convert {}", config.input.display()))?;

    println!(
        "  Written: {} ({} triples)",
        report.output.display(),
        report.triple_count
    );
    println!("Conversion complete.");
    Ok(())
}
