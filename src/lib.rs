//! Ship-Breaking Integrator Library
//!
//! Harmonizes yearly ship-breaking CSV lists, whose layouts drift from year
//! to year, into a single unified table keyed by IMO number.
//!
//! This library provides tools for:
//! - Locating the real header line below free-text preambles
//! - Mapping each year's column labels onto one canonical schema
//! - Splitting combined "GT / LDT" fields, classifying ship types and
//!   inferring the scrapping country from the yard location
//! - Filling missing tonnage from other years' records of the same vessel
//! - Writing the unified CSV with polars

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod harmonizer;
pub mod header;
pub mod models;
pub mod processor;

// Re-export commonly used types
pub use config::IntegrationConfig;
pub use error::{IntegrationError, Result};
pub use models::{ProcessingStats, ShipRecord, ShipType};
pub use processor::{IntegrationOutput, IntegrationPipeline};
