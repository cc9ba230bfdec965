//! Application constants for the ship-breaking integrator
//!
//! Canonical column names, default file locations, and the built-in
//! lookup tables that seed [`crate::config::IntegrationConfig`].

// =============================================================================
// Canonical Schema
// =============================================================================

/// Canonical column names
pub mod columns {
    pub const YEAR: &str = "YEAR";
    pub const IMO: &str = "IMO";
    pub const NAME: &str = "NAME";
    pub const TYPE: &str = "TYPE";
    pub const GT: &str = "GT";
    pub const LDT: &str = "LDT";
    pub const BUILT: &str = "BUILT";
    pub const AGE: &str = "AGE";
    pub const LAST_FLAG: &str = "LAST_FLAG";
    pub const PLACE: &str = "PLACE";
    pub const COUNTRY: &str = "COUNTRY";

    /// Owner name, only used as a fallback for NAME
    pub const OWNER_NAME: &str = "OWNER_NAME";

    /// Combined "GT / LDT" text column found in some years
    pub const GT_LDT_MIXED: &str = "GT_LDT_MIXED";
}

/// Output column order
pub const SCHEMA: &[&str] = &[
    columns::YEAR,
    columns::IMO,
    columns::NAME,
    columns::TYPE,
    columns::GT,
    columns::LDT,
    columns::BUILT,
    columns::AGE,
    columns::LAST_FLAG,
    columns::PLACE,
    columns::COUNTRY,
];

/// Columns a source file may legitimately provide (AGE is always derived)
pub const SOURCE_COLUMNS: &[&str] = &[
    columns::IMO,
    columns::NAME,
    columns::TYPE,
    columns::GT,
    columns::LDT,
    columns::BUILT,
    columns::LAST_FLAG,
    columns::PLACE,
    columns::COUNTRY,
    columns::OWNER_NAME,
    columns::GT_LDT_MIXED,
];

/// Placeholder for string fields that could not be resolved
pub const SENTINEL: &str = "Unknown";

// =============================================================================
// Paths and Discovery
// =============================================================================

/// Default directory of yearly CSV files
pub const DEFAULT_INPUT_DIR: &str = "curr_data";

/// Default unified output file
pub const DEFAULT_OUTPUT_FILE: &str = "shipbreaking_unified.csv";

/// Input file pattern, relative to the input directory
pub const INPUT_FILE_PATTERN: &str = "*.csv";

/// Rows shown in the post-run preview
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

// =============================================================================
// Built-in Lookup Tables
// =============================================================================

/// Substrings that identify the real header line
pub const HEADER_KEYWORDS: &[&str] = &["IMO#", "IMO number", "Beneficial owner"];

/// Observed header labels and their canonical column
pub const COLUMN_SYNONYMS: &[(&str, &str)] = &[
    ("IMO#", columns::IMO),
    ("IMO number", columns::IMO),
    ("IMO  number", columns::IMO),
    ("NAME", columns::NAME),
    ("Name of ship ", columns::NAME),
    ("VESSEL", columns::NAME),
    ("TYPE", columns::TYPE),
    ("Type of ship", columns::TYPE),
    ("GT", columns::GT),
    ("GT / LDT", columns::GT_LDT_MIXED),
    ("LDT", columns::LDT),
    ("Ldt (light displacement ton)", columns::LDT),
    ("BUILT", columns::BUILT),
    ("Built in (y)", columns::BUILT),
    ("FLAG", columns::LAST_FLAG),
    ("Last flag", columns::LAST_FLAG),
    ("LAST FLAG", columns::LAST_FLAG),
    ("FLAG_STATE", columns::LAST_FLAG),
    ("PLACE", columns::PLACE),
    ("Destination yard", columns::PLACE),
    ("COUNTRY", columns::COUNTRY),
    ("BENEFICIAL OWNER", columns::OWNER_NAME),
    ("Beneficial owner", columns::OWNER_NAME),
    ("Beneficial owner of the ship", columns::OWNER_NAME),
];

/// Ship type rules in evaluation order (first match wins)
pub const TYPE_RULES: &[(&str, &[&str])] = &[
    ("Container Ship", &["container"]),
    ("Tanker", &["tanker"]),
    ("Bulk Carrier", &["bulk", "ore carrier"]),
    ("Ro-Ro/Vehicle Carrier", &["ro-ro", "roro", "vehicles"]),
    ("Passenger/Cruise Ship", &["passenger", "cruise"]),
    ("Offshore/Supply Vessel", &["supply", "tug", "offshore"]),
    ("Fishing Vessel", &["fishing"]),
    ("Dredger", &["dredger", "hopper"]),
    ("Reefer", &["refrigerated", "reefer"]),
];

/// Scrapping-place keywords and the country they imply, in evaluation order
pub const COUNTRY_RULES: &[(&str, &[&str])] = &[
    ("India", &["alang", "sachana", "mumbai"]),
    ("Bangladesh", &["chittagong", "chattogram"]),
    ("Pakistan", &["gadani"]),
    ("Turkey", &["aliaga"]),
];

/// Gross tonnage inside a combined "GT / LDT" field
pub const GT_PATTERN: &str = r"(?i)GT:?\s*(\d+)";

/// Light displacement tonnage inside a combined "GT / LDT" field
pub const LDT_PATTERN: &str = r"(?i)LDT:?\s*([\d\.]+)";

/// Raw field values read as missing
pub const NULL_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// NAME values treated as absent before the owner-name fallback
pub const NAME_PLACEHOLDERS: &[&str] = &["", "Unknown", "nan"];
