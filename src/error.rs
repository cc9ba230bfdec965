//! Error handling for ship-breaking integration.
//!
//! Separates pipeline-fatal conditions (missing input directory, no input
//! files, bad configuration) from per-file conditions that the orchestrator
//! absorbs into the run summary.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntegrationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("Input directory not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("No CSV files found in: {path}")]
    NoInputFiles { path: PathBuf },

    #[error("No four-digit year in file name: {path}")]
    MissingYear { path: PathBuf },

    #[error("Failed to parse file: {path} - {reason}")]
    FileParse { path: PathBuf, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

pub type Result<T> = std::result::Result<T, IntegrationError>;
