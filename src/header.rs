//! File-level header handling.
//!
//! Extracts the reporting year from a file name and locates the line
//! where the real column header starts, skipping the title and legend
//! text that precedes it in many yearly reports.

use crate::error::{IntegrationError, Result};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

fn year_regex() -> &'static Regex {
    static YEAR: OnceLock<Regex> = OnceLock::new();
    YEAR.get_or_init(|| Regex::new(r"\d{4}").expect("year pattern is valid"))
}

/// Extract the first four consecutive digits of the file's base name
pub fn extract_year(file_path: &Path) -> Option<i32> {
    let file_name = file_path.file_name()?.to_string_lossy();
    year_regex()
        .find(&file_name)
        .and_then(|m| m.as_str().parse::<i32>().ok())
}

/// Like [`extract_year`], but as a per-file error
pub fn require_year(file_path: &Path) -> Result<i32> {
    extract_year(file_path).ok_or_else(|| IntegrationError::MissingYear {
        path: file_path.to_path_buf(),
    })
}

/// Index of the first line containing any of `keywords`, or 0 if none does
///
/// Invalid UTF-8 is decoded lossily so it never aborts the scan.
pub fn locate_header_line<S: AsRef<str>>(content: &[u8], keywords: &[S]) -> usize {
    let found = content
        .split(|&b| b == b'\n')
        .map(String::from_utf8_lossy)
        .position(|line| keywords.iter().any(|kw| line.contains(kw.as_ref())));

    match found {
        Some(index) => {
            debug!("Header keyword found on line {}", index);
            index
        }
        None => {
            debug!("No header keyword found, assuming header on line 0");
            0
        }
    }
}

/// Byte offset at which line `line_index` starts
pub fn line_offset(content: &[u8], line_index: usize) -> usize {
    if line_index == 0 {
        return 0;
    }
    content
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == b'\n')
        .nth(line_index - 1)
        .map(|(pos, _)| pos + 1)
        .unwrap_or(content.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_extract_year() {
        assert_eq!(extract_year(Path::new("data_2019_q1.csv")), Some(2019));
        assert_eq!(extract_year(Path::new("Shipbreaking list 2021.csv")), Some(2021));
        assert_eq!(extract_year(Path::new("legacy_data.csv")), None);
        assert_eq!(extract_year(Path::new("v12_report.csv")), None);
    }

    #[test]
    fn test_extract_year_uses_base_name_only() {
        let path = PathBuf::from("/archive/2015/legacy_data.csv");
        assert_eq!(extract_year(&path), None);

        let path = PathBuf::from("/archive/2015/list_2016.csv");
        assert_eq!(extract_year(&path), Some(2016));
    }

    #[test]
    fn test_extract_year_takes_first_run() {
        assert_eq!(extract_year(Path::new("2017-2018_list.csv")), Some(2017));
        // First four digits of a longer run
        assert_eq!(extract_year(Path::new("list_202301.csv")), Some(2023));
    }

    #[test]
    fn test_require_year_error() {
        match require_year(Path::new("legacy_data.csv")) {
            Err(IntegrationError::MissingYear { path }) => {
                assert_eq!(path, PathBuf::from("legacy_data.csv"));
            }
            other => panic!("Expected MissingYear error, got {:?}", other),
        }
    }

    #[test]
    fn test_locate_header_line() {
        let content = b"Ship Breaking Platform\nList of ships 2019\n,,\nIMO#,NAME,TYPE\n1,A,B\n";
        assert_eq!(locate_header_line(content, &["IMO#", "IMO number"]), 3);
    }

    #[test]
    fn test_locate_header_line_defaults_to_zero() {
        let content = b"VESSEL,TYPE\nA,B\n";
        assert_eq!(locate_header_line(content, &["IMO#"]), 0);
    }

    #[test]
    fn test_locate_header_line_is_case_sensitive() {
        let content = b"imo# lowercase note\nBeneficial owner,IMO number\n";
        assert_eq!(locate_header_line(content, &["IMO#", "Beneficial owner"]), 1);
    }

    #[test]
    fn test_locate_header_line_tolerates_invalid_utf8() {
        let content = b"title \xff\xfe\nIMO number,Name\n";
        assert_eq!(locate_header_line(content, &["IMO number"]), 1);
    }

    #[test]
    fn test_line_offset() {
        let content = b"a\nbb\nccc\n";
        assert_eq!(line_offset(content, 0), 0);
        assert_eq!(line_offset(content, 1), 2);
        assert_eq!(line_offset(content, 2), 5);
        assert_eq!(line_offset(content, 10), content.len());
    }
}
