//! Main processing engine for ship-breaking integration.
//!
//! Orchestrates the complete workflow: file discovery, per-file
//! harmonization, concatenation, cross-record imputation, filtering
//! and writing the unified table.

pub mod discovery;
pub mod imputation;
pub mod writer;

#[cfg(test)]
pub mod tests;

use self::discovery::FileDiscovery;
use self::imputation::{drop_missing_imo, impute_tonnage};
use self::writer::UnifiedWriter;

use crate::config::IntegrationConfig;
use crate::error::{IntegrationError, Result};
use crate::harmonizer::Harmonizer;
use crate::models::{FileSchemaReport, ProcessingStats, ShipRecord};

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use polars::prelude::DataFrame;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Result of a completed run
#[derive(Debug)]
pub struct IntegrationOutput {
    pub stats: ProcessingStats,
    /// The table exactly as written
    pub frame: DataFrame,
}

/// Main pipeline for ship-breaking integration
#[derive(Debug)]
pub struct IntegrationPipeline {
    output_path: PathBuf,
    file_discovery: FileDiscovery,
    harmonizer: Harmonizer,
    writer: UnifiedWriter,
    show_progress: bool,
}

impl IntegrationPipeline {
    /// Create a pipeline with the built-in tables
    pub fn new(input_dir: PathBuf, output_path: PathBuf) -> Result<Self> {
        Self::with_config(input_dir, output_path, &IntegrationConfig::default())
    }

    /// Create a pipeline with custom lookup tables
    pub fn with_config(
        input_dir: PathBuf,
        output_path: PathBuf,
        config: &IntegrationConfig,
    ) -> Result<Self> {
        if !input_dir.is_dir() {
            return Err(IntegrationError::InputNotFound { path: input_dir });
        }

        Ok(Self {
            output_path: output_path.clone(),
            file_discovery: FileDiscovery::new(input_dir),
            harmonizer: Harmonizer::new(config)?,
            writer: UnifiedWriter::new(output_path),
            show_progress: false,
        })
    }

    /// Show a per-file progress bar and coloured stage headers
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Main processing entry point
    pub fn run(&self) -> Result<IntegrationOutput> {
        let start_time = Instant::now();
        if self.show_progress {
            println!("{}", "Starting ship-breaking integration".bright_green().bold());
            println!(
                "  {} {}",
                "Input:".bright_cyan(),
                self.file_discovery.input_dir().display()
            );
            println!("  {} {}", "Output:".bright_cyan(), self.output_path.display());
        }

        // Step 1: Discover CSV files
        let csv_files = self.file_discovery.discover_csv_files()?;
        info!("Found {} files to process", csv_files.len());

        let mut stats = ProcessingStats {
            files_found: csv_files.len(),
            output_path: self.output_path.clone(),
            ..ProcessingStats::default()
        };

        // Step 2: Harmonize each file and concatenate in file order
        let mut records = self.harmonize_all(&csv_files, &mut stats);
        stats.rows_read = records.len();

        // Step 3: Cross-record imputation
        info!("Performing ship-specific imputation for GT and LDT");
        let imputation = impute_tonnage(&mut records);
        stats.gt_imputed = imputation.gt_filled;
        stats.ldt_imputed = imputation.ldt_filled;

        // Step 4: Drop rows without a usable IMO
        stats.rows_missing_imo = drop_missing_imo(&mut records);
        if stats.rows_missing_imo > 0 {
            info!("Dropped {} rows with missing IMO numbers", stats.rows_missing_imo);
        }

        // Step 5: Write the unified table
        let frame = self.writer.write(&records)?;
        stats.total_rows = frame.height();
        stats.processing_time_ms = start_time.elapsed().as_millis();

        info!(
            "Pipeline complete: {} rows written to {}",
            stats.total_rows,
            self.output_path.display()
        );

        Ok(IntegrationOutput { stats, frame })
    }

    /// Report how each file's columns map, without writing output
    pub fn discover(&self) -> Result<Vec<FileSchemaReport>> {
        let csv_files = self.file_discovery.discover_csv_files()?;
        Ok(csv_files
            .iter()
            .map(|path| self.harmonizer.inspect_file(path))
            .collect())
    }

    /// Harmonize files in order, absorbing per-file failures into `stats`
    fn harmonize_all(&self, files: &[PathBuf], stats: &mut ProcessingStats) -> Vec<ShipRecord> {
        let pb = self.progress_bar(files.len());
        let mut records = Vec::new();

        for file_path in files {
            if let Some(file_name) = file_path.file_name() {
                pb.set_message(format!("Processing: {}", file_name.to_string_lossy()));
            }

            match self.harmonizer.harmonize_file(file_path) {
                Ok(harmonized) => {
                    debug!(
                        "Harmonized {} rows from {}",
                        harmonized.records.len(),
                        file_path.display()
                    );
                    stats.files_processed += 1;
                    stats.rows_malformed += harmonized.rows_discarded;
                    records.extend(harmonized.records);
                }
                Err(e @ IntegrationError::MissingYear { .. }) => {
                    warn!("{}. Skipping.", e);
                    stats.files_skipped += 1;
                    stats.warn(e.to_string());
                }
                Err(e) => {
                    warn!("{}. Skipping file.", e);
                    stats.files_failed += 1;
                    stats.warn(e.to_string());
                }
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        records
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(len as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
        );
        pb
    }
}
