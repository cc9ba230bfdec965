//! File discovery module for yearly ship-breaking reports
//!
//! Finds the `*.csv` files directly inside the input directory and returns
//! them in file-name order, which fixes the concatenation order of the
//! unified table.

use crate::constants::INPUT_FILE_PATTERN;
use crate::error::{IntegrationError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File discovery component for an input directory
#[derive(Debug)]
pub struct FileDiscovery {
    input_dir: PathBuf,
}

impl FileDiscovery {
    /// Create a new file discovery instance
    pub fn new(input_dir: PathBuf) -> Self {
        Self { input_dir }
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Discover all CSV files, sorted by path
    ///
    /// An empty result is `NoInputFiles`, which aborts the run.
    pub fn discover_csv_files(&self) -> Result<Vec<PathBuf>> {
        if !self.input_dir.is_dir() {
            return Err(IntegrationError::InputNotFound {
                path: self.input_dir.clone(),
            });
        }

        let escaped_dir = glob::Pattern::escape(&self.input_dir.to_string_lossy());
        let pattern = format!("{}/{}", escaped_dir, INPUT_FILE_PATTERN);
        debug!("Searching for CSV files with pattern: {}", pattern);

        let entries = glob::glob(&pattern).map_err(|e| IntegrationError::Configuration {
            message: format!("invalid discovery pattern '{}': {}", pattern, e),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => warn!("Unreadable directory entry: {}", e),
            }
        }
        files.sort();

        if files.is_empty() {
            return Err(IntegrationError::NoInputFiles {
                path: self.input_dir.clone(),
            });
        }

        debug!("Found {} CSV files", files.len());
        Ok(files)
    }
}
