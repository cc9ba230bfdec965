//! Integration tests for the processor module
//!
//! Tests the complete pipeline against temporary input directories of
//! yearly CSV files.


use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create an input directory populated with `(file_name, content)` pairs
pub fn create_input_dir(temp_dir: &TempDir, files: &[(&str, &str)]) -> PathBuf {
    let input_dir = temp_dir.path().join("curr_data");
    fs::create_dir_all(&input_dir).unwrap();
    for (name, content) in files {
        fs::write(input_dir.join(name), content).unwrap();
    }
    input_dir
}

/// Read the unified output back as header + rows of strings
pub fn read_output(path: &std::path::Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader.headers().unwrap().iter().map(String::from).collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect();
    (headers, rows)
}
