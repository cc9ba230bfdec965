//! Test utilities for per-file harmonization tests
//!
//! Helpers write yearly fixture files into a temporary directory and
//! build a harmonizer with the default tables.

use super::Harmonizer;
use crate::config::IntegrationConfig;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

mod row_tests;

/// Harmonizer with the built-in tables
pub fn default_harmonizer() -> Harmonizer {
    Harmonizer::new(&IntegrationConfig::default()).unwrap()
}

/// Write `content` as `file_name` inside `dir`
pub fn write_fixture(dir: &TempDir, file_name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(file_name);
    fs::write(&path, content).unwrap();
    path
}
