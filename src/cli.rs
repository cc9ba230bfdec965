//! Command-line interface components.

use crate::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_FILE, DEFAULT_PREVIEW_ROWS};
use crate::models::{FileSchemaReport, ProcessingStats};
use clap::Parser;
use colored::*;
use polars::prelude::DataFrame;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shipbreak_integrator")]
#[command(about = "Harmonize yearly ship-breaking lists into one unified CSV keyed by IMO number")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Directory containing the yearly CSV files
    #[arg(value_name = "INPUT_DIR", default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Unified output CSV file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// JSON file overriding the built-in lookup tables
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Discovery mode: report how each file's columns map, then exit (no output written)
    #[arg(long)]
    pub discovery_only: bool,

    /// Print the run summary as JSON instead of the coloured report
    #[arg(long)]
    pub summary_json: bool,

    /// Rows of the unified table to preview after writing (0 disables the preview)
    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub preview_rows: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Determine the log level from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Progress bars and coloured stage headers
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.summary_json
    }
}

/// Print the coloured run summary
pub fn print_summary(stats: &ProcessingStats) {
    println!("\n{}", "Processing Summary".bright_green().bold());
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.processing_time_ms.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Files found:".bright_cyan(),
        stats.files_found.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Files harmonized:".bright_cyan(),
        stats.files_processed.to_string().bright_white()
    );
    if stats.files_skipped > 0 {
        println!(
            "  {} {}",
            "Files skipped (no year):".bright_yellow(),
            stats.files_skipped.to_string().bright_yellow()
        );
    }
    if stats.files_failed > 0 {
        println!(
            "  {} {}",
            "Files failed:".bright_red(),
            stats.files_failed.to_string().bright_red().bold()
        );
    }
    println!(
        "  {} {}",
        "Rows read:".bright_cyan(),
        stats.rows_read.to_string().bright_white()
    );
    if stats.rows_malformed > 0 {
        println!(
            "  {} {}",
            "Malformed rows discarded:".bright_yellow(),
            stats.rows_malformed.to_string().bright_yellow()
        );
    }
    println!(
        "  {} {}",
        "Rows without IMO dropped:".bright_cyan(),
        stats.rows_missing_imo.to_string().bright_white()
    );
    println!(
        "  {} {} GT, {} LDT",
        "Values imputed:".bright_cyan(),
        stats.gt_imputed.to_string().bright_white(),
        stats.ldt_imputed.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Total rows:".bright_cyan(),
        stats.total_rows.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Output:".bright_cyan(),
        stats.output_path.display()
    );

    if !stats.warnings.is_empty() {
        println!("\n{}", "Warnings".bright_yellow().bold());
        for warning in &stats.warnings {
            println!("  {} {}", "-".yellow(), warning);
        }
    }
}

/// Print the per-file schema discovery report
pub fn print_discovery_report(reports: &[FileSchemaReport]) {
    println!("{}", "Schema discovery".bright_green().bold());

    for report in reports {
        let year = report
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "none (skipped)".to_string());

        println!("\n{}", report.file_name.bright_white().bold());
        println!("  {} {}", "Year:".bright_cyan(), year);

        if let Some(error) = &report.error {
            println!("  {} {}", "Error:".bright_red(), error);
            continue;
        }

        println!("  {} {}", "Header line:".bright_cyan(), report.header_line);
        println!("  {} {}", "Data rows:".bright_cyan(), report.data_rows);
        for (label, mapped) in &report.columns {
            if label == mapped {
                println!("    {}", label);
            } else {
                println!("    {} -> {}", label, mapped.bright_white());
            }
        }
        if !report.unmapped.is_empty() {
            println!(
                "  {} {}",
                "Unmapped:".bright_yellow(),
                report.unmapped.join(", ")
            );
        }
    }
}

/// Print the head of the unified table and its per-column null counts
pub fn print_preview(frame: &DataFrame, rows: usize) {
    if rows == 0 {
        return;
    }

    println!("\n{}", "Unified data preview".bright_green().bold());
    println!("{}", frame.head(Some(rows)));
    println!("\n{}", "Null counts".bright_green().bold());
    println!("{}", frame.null_count());
}
