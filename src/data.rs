//! Loading named columns from CSV files
//!
//! Loading is lenient: a missing file, a missing column or a cell that is not a
//! number produces a [`Diagnostic`] and an empty column, never an error.
//!
//! Empty cells (and cells missing from short rows) are read as NaN.
//!
//! ```rust,no_run
//! # use quickfig::data::load_xy;
//! let outcome = load_xy("measurements.csv", "time", "voltage");
//! for diagnostic in outcome.diagnostics() {
//!     eprintln!("{diagnostic}");
//! }
//! let (time, voltage) = outcome.into_value();
//! ```
use std::path::Path;

use crate::diagnostic::{Diagnostic, DiagnosticKind, Outcome};

/// Reads the named columns of a CSV file with a header row.
///
/// Returns one vector per requested name, in the order requested. Columns that
/// cannot be loaded are empty and reported with a diagnostic.
pub fn load_columns(path: impl AsRef<Path>, names: &[&str]) -> Outcome<Vec<Vec<f64>>> {
    let path = path.as_ref();
    let empty = || vec![Vec::new(); names.len()];

    if !path.is_file() {
        return Outcome::with_diagnostics(
            empty(),
            vec![Diagnostic::raise(
                DiagnosticKind::InvalidPath,
                format!("Not a valid file name: {}", path.display()),
            )],
        );
    }

    let (headers, records) = match read_records(path) {
        Ok(table) => table,
        Err(e) => {
            return Outcome::with_diagnostics(
                empty(),
                vec![Diagnostic::raise(
                    DiagnosticKind::UnreadableFile,
                    format!("Failed to read {}: {e}", path.display()),
                )],
            )
        }
    };

    let mut diagnostics = Vec::new();
    let mut columns = Vec::with_capacity(names.len());
    for name in names {
        let Some(index) = headers.iter().position(|h| h == *name) else {
            diagnostics.push(Diagnostic::raise(
                DiagnosticKind::MissingColumn,
                format!("'{name}' is not a valid column name in {}", path.display()),
            ));
            columns.push(Vec::new());
            continue;
        };

        match parse_column(&records, index) {
            Ok(column) => columns.push(column),
            Err((row, cell)) => {
                diagnostics.push(Diagnostic::raise(
                    DiagnosticKind::InvalidValue,
                    format!("Column '{name}' row {row}: '{cell}' is not a number"),
                ));
                columns.push(Vec::new());
            }
        }
    }

    tracing::debug!(path = %path.display(), rows = records.len(), "loaded columns");
    Outcome::with_diagnostics(columns, diagnostics)
}

/// Reads an `(x, y)` column pair.
///
/// If either column cannot be loaded, both are returned empty.
pub fn load_xy(path: impl AsRef<Path>, x_name: &str, y_name: &str) -> Outcome<(Vec<f64>, Vec<f64>)> {
    let (columns, diagnostics) = load_columns(path, &[x_name, y_name]).into_parts();
    if !diagnostics.is_empty() {
        return Outcome::with_diagnostics((Vec::new(), Vec::new()), diagnostics);
    }

    let mut columns = columns.into_iter();
    let x = columns.next().unwrap_or_default();
    let y = columns.next().unwrap_or_default();
    Outcome::clean((x, y))
}

fn read_records(path: &Path) -> Result<(Vec<String>, Vec<csv::StringRecord>), csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.iter().map(str::to_string).collect();
    let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    Ok((headers, records))
}

/// Parses one column, returning the 1-based data row and cell text of the first bad value.
fn parse_column(records: &[csv::StringRecord], index: usize) -> Result<Vec<f64>, (usize, String)> {
    records
        .iter()
        .enumerate()
        .map(|(row, record)| match record.get(index) {
            None | Some("") => Ok(f64::NAN),
            Some(cell) => cell
                .parse::<f64>()
                .map_err(|_| (row + 1, cell.to_string())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn csv_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn test_load_columns() {
        let file = csv_file("time, voltage, current\n0, 1.5, 3\n1, 2.5, 4\n2, 3.5, 5\n");
        let outcome = load_columns(file.path(), &["voltage", "time"]);
        assert!(outcome.is_clean());
        assert_eq!(
            outcome.into_value(),
            vec![vec![1.5, 2.5, 3.5], vec![0.0, 1.0, 2.0]]
        );
    }

    #[test]
    fn test_missing_column_is_empty() {
        let file = csv_file("a,b\n1,2\n3,4\n");
        let outcome = load_columns(file.path(), &["a", "nope"]);
        assert!(outcome.has(DiagnosticKind::MissingColumn));
        assert_eq!(outcome.value()[0], vec![1.0, 3.0]);
        assert!(outcome.value()[1].is_empty());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let outcome = load_columns(dir.path().join("absent.csv"), &["a", "b"]);
        assert!(outcome.has(DiagnosticKind::InvalidPath));
        assert_eq!(outcome.into_value(), vec![Vec::<f64>::new(), Vec::new()]);

        // A directory is not a file either
        let outcome = load_xy(dir.path(), "a", "b");
        assert!(outcome.has(DiagnosticKind::InvalidPath));
    }

    #[test]
    fn test_empty_cells_are_nan() {
        let file = csv_file("x,y\n1,\n2,5\n3\n");
        let columns = load_columns(file.path(), &["y"]).into_value();
        assert!(columns[0][0].is_nan());
        assert_eq!(columns[0][1], 5.0);
        assert!(columns[0][2].is_nan());
    }

    #[test]
    fn test_invalid_value() {
        let file = csv_file("x,y\n1,2\n2,abc\n");
        let outcome = load_columns(file.path(), &["x", "y"]);
        assert!(outcome.has(DiagnosticKind::InvalidValue));
        assert_eq!(outcome.value()[0], vec![1.0, 2.0]);
        assert!(outcome.value()[1].is_empty());
        assert!(outcome.diagnostics()[0].message().contains("row 2"));
    }

    #[test]
    fn test_load_xy_all_or_nothing() {
        let file = csv_file("x,y\n1,2\n");
        let outcome = load_xy(file.path(), "x", "y");
        assert!(outcome.is_clean());
        assert_eq!(outcome.into_value(), (vec![1.0], vec![2.0]));

        let outcome = load_xy(file.path(), "x", "z");
        assert!(outcome.has(DiagnosticKind::MissingColumn));
        assert_eq!(outcome.into_value(), (vec![], vec![]));
    }
}
