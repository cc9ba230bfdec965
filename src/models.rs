//! Core data structures for ship-breaking integration.
//!
//! Defines the canonical ship record, the closed ship-type vocabulary,
//! per-file results, and run statistics used throughout the library.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Controlled ship-type vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipType {
    #[serde(rename = "Container Ship")]
    ContainerShip,
    #[serde(rename = "Tanker")]
    Tanker,
    #[serde(rename = "Bulk Carrier")]
    BulkCarrier,
    #[serde(rename = "Ro-Ro/Vehicle Carrier")]
    RoRoVehicleCarrier,
    #[serde(rename = "Passenger/Cruise Ship")]
    PassengerCruiseShip,
    #[serde(rename = "Offshore/Supply Vessel")]
    OffshoreSupplyVessel,
    #[serde(rename = "Fishing Vessel")]
    FishingVessel,
    #[serde(rename = "Dredger")]
    Dredger,
    #[serde(rename = "Reefer")]
    Reefer,
    #[serde(rename = "Other")]
    Other,
}

impl ShipType {
    pub const ALL: [ShipType; 10] = [
        ShipType::ContainerShip,
        ShipType::Tanker,
        ShipType::BulkCarrier,
        ShipType::RoRoVehicleCarrier,
        ShipType::PassengerCruiseShip,
        ShipType::OffshoreSupplyVessel,
        ShipType::FishingVessel,
        ShipType::Dredger,
        ShipType::Reefer,
        ShipType::Other,
    ];

    /// Label written to the output table
    pub fn label(&self) -> &'static str {
        match self {
            ShipType::ContainerShip => "Container Ship",
            ShipType::Tanker => "Tanker",
            ShipType::BulkCarrier => "Bulk Carrier",
            ShipType::RoRoVehicleCarrier => "Ro-Ro/Vehicle Carrier",
            ShipType::PassengerCruiseShip => "Passenger/Cruise Ship",
            ShipType::OffshoreSupplyVessel => "Offshore/Supply Vessel",
            ShipType::FishingVessel => "Fishing Vessel",
            ShipType::Dredger => "Dredger",
            ShipType::Reefer => "Reefer",
            ShipType::Other => "Other",
        }
    }

    /// Look up a type by its output label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the canonical schema
///
/// `imo` stays optional until the orchestrator's final filter; every row
/// that reaches the output has it set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipRecord {
    pub year: i32,
    pub imo: Option<i64>,
    pub name: String,
    pub ship_type: ShipType,
    pub gt: Option<f64>,
    pub ldt: Option<f64>,
    pub built: Option<i32>,
    pub age: Option<i32>,
    pub last_flag: String,
    pub place: String,
    pub country: String,
}

/// Canonical table produced from one input file
#[derive(Debug, Clone)]
pub struct HarmonizedFile {
    pub path: PathBuf,
    pub year: i32,
    pub records: Vec<ShipRecord>,
    /// Malformed rows discarded while reading
    pub rows_discarded: usize,
}

/// Schema discovery result for one input file
#[derive(Debug, Clone, Serialize)]
pub struct FileSchemaReport {
    pub file_name: String,
    pub year: Option<i32>,
    pub header_line: usize,
    /// Raw label and the column it maps to
    pub columns: Vec<(String, String)>,
    /// Labels outside the canonical vocabulary, dropped on projection
    pub unmapped: Vec<String>,
    pub data_rows: usize,
    pub error: Option<String>,
}

/// Run statistics
#[derive(Debug, Default, Clone, Serialize)]
pub struct ProcessingStats {
    pub files_found: usize,
    pub files_processed: usize,
    /// Files without a year in their name
    pub files_skipped: usize,
    /// Files that could not be read or parsed
    pub files_failed: usize,
    pub rows_read: usize,
    pub rows_malformed: usize,
    pub rows_missing_imo: usize,
    pub gt_imputed: usize,
    pub ldt_imputed: usize,
    pub total_rows: usize,
    pub warnings: Vec<String>,
    pub output_path: PathBuf,
    pub processing_time_ms: u128,
}

impl ProcessingStats {
    /// Record a recovered problem for the summary
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}
