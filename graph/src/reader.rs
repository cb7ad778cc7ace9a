//! Delimited-table loader with an explicit schema check.
//!
//! The header is validated for the required `inventor` and `invention`
//! columns before any record is read, so a missing column surfaces as a typed
//! [`ConvertError::MissingColumn`] rather than a per-row deserialization
//! fault.

use std::io;
use std::path::Path;

use crate::error::ConvertError;
use crate::model::{InventionRow, REQUIRED_COLUMNS};

/// Loads the full table at `path` into memory, in input order.
///
/// Columns other than `inventor` and `invention` are ignored. An empty table
/// (header only) is valid and yields an empty vector.
///
/// # Errors
///
/// Returns [`ConvertError::InputNotFound`] if the file cannot be opened or
/// its header cannot be read, [`ConvertError::MissingColumn`] if a required
/// column is absent, and [`ConvertError::MalformedRow`] if a record cannot be
/// read as a row.
pub fn load_table(path: &Path) -> Result<Vec<InventionRow>, ConvertError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| open_error(path, e))?;

    let headers = reader.headers().map_err(|e| open_error(path, e))?;
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(ConvertError::MissingColumn { column });
        }
    }

    let mut rows = Vec::new();
    for (i, result) in reader.deserialize::<InventionRow>().enumerate() {
        let row = result.map_err(|source| ConvertError::MalformedRow {
            record: i as u64 + 1,
            source,
        })?;
        rows.push(row);
    }
    Ok(rows)
}

/// Maps a CSV error raised before the schema check to `InputNotFound`.
fn open_error(path: &Path, err: csv::Error) -> ConvertError {
    let source = match err.into_kind() {
        csv::ErrorKind::Io(e) => e,
        other => io::Error::new(io::ErrorKind::InvalidData, format!("{other:?}")),
    };
    ConvertError::InputNotFound {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    fn table(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_rows_in_input_order() {
        let file = table("inventor,invention\nwd:Q937,wd:Q43653\nwd:Q935,wd:Q11649\n");
        let rows = load_table(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].inventor, "wd:Q937");
        assert_eq!(rows[0].invention, "wd:Q43653");
        assert_eq!(rows[1].inventor, "wd:Q935");
    }

    #[test]
    fn ignores_extra_columns() {
        let file = table("inventor,born,invention\nwd:Q937,1879,wd:Q43653\n");
        let rows = load_table(file.path()).unwrap();
        assert_eq!(rows, vec![InventionRow {
            inventor: "wd:Q937".to_string(),
            invention: "wd:Q43653".to_string(),
        }]);
    }

    #[test]
    fn header_only_table_is_empty() {
        let file = table("inventor,invention\n");
        let rows = load_table(file.path()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn missing_column_is_typed() {
        let file = table("inventor,patent\nwd:Q937,wd:Q43653\n");
        let err = load_table(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::MissingColumn { column: "invention" }
        ));
    }

    #[test]
    fn nonexistent_path_is_input_not_found() {
        let err = load_table(Path::new("no/such/table.csv")).unwrap_err();
        assert!(matches!(err, ConvertError::InputNotFound { .. }));
    }

    #[test]
    fn short_record_is_malformed_row() {
        let file = table("inventor,invention\nwd:Q937\n");
        let err = load_table(file.path()).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedRow { record: 1, .. }));
    }

    #[test]
    fn empty_field_passes_through() {
        let file = table("inventor,invention\nwd:Q937,\n");
        let rows = load_table(file.path()).unwrap();
        assert_eq!(rows[0].invention, "");
    }
}
