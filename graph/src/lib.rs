//! Batch converter from an (inventor, invention) CSV table to a Turtle RDF
//! graph.
//!
//! Each table row becomes one RDF statement with the fixed predicate
//! `wdt:P800` ("notable work"), written under the standard `wdt:`/`wd:`
//! Wikidata prefixes. The conversion is a single linear pass: load the full
//! table, check the schema, format every row, write one document. There is no
//! partial output; any failure leaves the destination untouched.
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::PathBuf;
//! use inventors_graph::{convert, Config};
//!
//! let config = Config {
//!     input: PathBuf::from("data/inventors_inventions.csv"),
//!     output: PathBuf::from("data/inventors_graph.ttl"),
//! };
//! let report = convert(&config).expect("Conversion failed");
//! println!("{} triples", report.triple_count);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod model;
pub mod reader;
pub mod serializer;

use std::fs;
use std::path::PathBuf;

pub use error::ConvertError;
pub use model::InventionRow;

/// Converter configuration: where to read the table, where to write the
/// document.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the delimited input table. The header must contain `inventor`
    /// and `invention` columns; other columns are ignored.
    pub input: PathBuf,
    /// Destination path for the Turtle document. Overwritten if it exists;
    /// the parent directory is not created here.
    pub output: PathBuf,
}

/// Report of a completed conversion.
#[derive(Debug)]
pub struct ConversionReport {
    /// Number of triple lines written (one per input row).
    pub triple_count: usize,
    /// Path the document was written to.
    pub output: PathBuf,
}

/// Runs the full conversion: load, schema-check, format, write.
///
/// The document is assembled entirely in memory and written in one call, so a
/// failure in any earlier step modifies nothing on disk.
///
/// # Errors
///
/// Returns [`ConvertError::InputNotFound`] if the input cannot be read,
/// [`ConvertError::MissingColumn`] if a required column is absent,
/// [`ConvertError::MalformedRow`] if a record cannot be read as a row, and
/// [`ConvertError::OutputWriteError`] if the destination cannot be written.
pub fn convert(config: &Config) -> Result<ConversionReport, ConvertError> {
    let rows = reader::load_table(&config.input)?;
    let document = serializer::turtle::to_turtle(&rows);

    fs::write(&config.output, document).map_err(|source| ConvertError::OutputWriteError {
        path: config.output.clone(),
        source,
    })?;

    Ok(ConversionReport {
        triple_count: rows.len(),
        output: config.output.clone(),
    })
}
