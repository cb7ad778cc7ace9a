//! Failure taxonomy for the converter.
//!
//! Every failure is fatal to the run: the converter either writes a complete
//! document or leaves the output path untouched.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by [`convert`](crate::convert).
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input path does not exist or cannot be read.
    #[error("input table not found or unreadable: {path}")]
    InputNotFound {
        /// The input path as given.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The input header lacks a required column.
    #[error("input table is missing required column `{column}`")]
    MissingColumn {
        /// Name of the absent column.
        column: &'static str,
    },

    /// A record could not be read as an (inventor, invention) row.
    #[error("malformed row at record {record}")]
    MalformedRow {
        /// 1-based data record number, header excluded.
        record: u64,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// The output document could not be written.
    #[error("failed to write output: {path}")]
    OutputWriteError {
        /// The destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
