//! Raw table reading
//!
//! Reads one yearly CSV from its detected header line onwards into a table
//! of optional strings. Malformed rows are discarded and counted rather
//! than failing the file.

use crate::error::{IntegrationError, Result};
use crate::header::line_offset;
use std::path::Path;
use tracing::debug;

/// Untyped table read from one file, all cells still text
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// Trimmed header labels in file order
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
    /// Rows discarded as malformed
    pub rows_discarded: usize,
}

impl RawTable {
    /// Position of the first column carrying `label`
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == label)
    }

    /// Cell value, `None` for missing columns or null cells
    pub fn cell(&self, row: usize, column: Option<usize>) -> Option<&str> {
        column
            .and_then(|c| self.rows.get(row).and_then(|r| r.get(c)))
            .and_then(|v| v.as_deref())
    }
}

/// Parse `content` starting at line `header_line`
///
/// The first parsed record is the header. Records with more fields than the
/// header are malformed; records with fewer are padded with nulls.
pub fn read_table<S: AsRef<str>>(
    file_path: &Path,
    content: &[u8],
    header_line: usize,
    null_tokens: &[S],
) -> Result<RawTable> {
    let data = &content[line_offset(content, header_line)..];
    let text = std::str::from_utf8(data).map_err(|e| IntegrationError::FileParse {
        path: file_path.to_path_buf(),
        reason: format!("invalid UTF-8 in data section: {}", e),
    })?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| IntegrationError::FileParse {
            path: file_path.to_path_buf(),
            reason: format!("failed to read header row: {}", e),
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(IntegrationError::FileParse {
            path: file_path.to_path_buf(),
            reason: "no columns to parse".to_string(),
        });
    }

    let mut table = RawTable {
        headers,
        ..RawTable::default()
    };

    for (index, result) in csv_reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                debug!("Discarding record {}: {}", index + 1, e);
                table.rows_discarded += 1;
                continue;
            }
        };

        if record.len() > table.headers.len() {
            debug!(
                "Discarding record {}: expected {} fields, saw {}",
                index + 1,
                table.headers.len(),
                record.len()
            );
            table.rows_discarded += 1;
            continue;
        }

        let mut row: Vec<Option<String>> = record
            .iter()
            .map(|field| to_cell(field, null_tokens))
            .collect();
        row.resize(table.headers.len(), None);
        table.rows.push(row);
    }

    debug!(
        "Read {} rows ({} discarded) from {}",
        table.rows.len(),
        table.rows_discarded,
        file_path.display()
    );

    Ok(table)
}

/// Map a raw field to a cell, reading null tokens and blanks as missing
fn to_cell<S: AsRef<str>>(field: &str, null_tokens: &[S]) -> Option<String> {
    if field.trim().is_empty() || null_tokens.iter().any(|t| t.as_ref() == field) {
        None
    } else {
        Some(field.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const NULLS: &[&str] = &["", "NA", "nan", "N/A"];

    fn path() -> PathBuf {
        PathBuf::from("list_2020.csv")
    }

    #[test]
    fn test_read_table_from_header_line() {
        let content = b"Title line\n\nIMO#, NAME ,TYPE\n9000001,Alpha,Tanker\n9000002,Beta,Bulk\n";
        let table = read_table(&path(), content, 2, NULLS).unwrap();

        assert_eq!(table.headers, vec!["IMO#", "NAME", "TYPE"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.cell(1, table.column_index("NAME")), Some("Beta"));
        assert_eq!(table.rows_discarded, 0);
    }

    #[test]
    fn test_long_rows_discarded_short_rows_padded() {
        let content = b"IMO#,NAME,TYPE\n1,A,B,EXTRA\n2,C\n3,D,E\n";
        let table = read_table(&path(), content, 0, NULLS).unwrap();

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows_discarded, 1);
        assert_eq!(table.cell(0, Some(0)), Some("2"));
        assert_eq!(table.cell(0, Some(2)), None);
        assert_eq!(table.cell(1, Some(2)), Some("E"));
    }

    #[test]
    fn test_null_tokens_and_blanks_are_missing() {
        let content = b"IMO#,NAME,TYPE\nNA,  ,nan\n";
        let table = read_table(&path(), content, 0, NULLS).unwrap();

        assert_eq!(table.rows.len(), 1);
        assert!(table.rows[0].iter().all(Option::is_none));
    }

    #[test]
    fn test_quoted_fields_keep_commas() {
        let content = b"IMO#,PLACE\n9000001,\"Alang, India\"\n";
        let table = read_table(&path(), content, 0, NULLS).unwrap();

        assert_eq!(table.cell(0, table.column_index("PLACE")), Some("Alang, India"));
    }

    #[test]
    fn test_empty_content_is_file_error() {
        let result = read_table(&path(), b"", 0, NULLS);
        assert!(matches!(result, Err(IntegrationError::FileParse { .. })));
    }

    #[test]
    fn test_missing_column_cell_is_none() {
        let content = b"IMO#\n1\n";
        let table = read_table(&path(), content, 0, NULLS).unwrap();

        assert_eq!(table.cell(0, table.column_index("NAME")), None);
        assert_eq!(table.column_index("IMO#"), Some(0));
    }
}
