//! Per-file harmonization into the canonical schema
//!
//! A [`Harmonizer`] owns the lookup tables from [`IntegrationConfig`] and
//! turns one yearly CSV into canonical [`ShipRecord`]s:
//!
//! 1. Extract the year from the file name (file skipped if absent)
//! 2. Locate the header line and read rows, discarding malformed ones
//! 3. Rename columns through the synonym table
//! 4. Split the combined tonnage column when present
//! 5. Resolve names, classify types, coerce numerics, derive age
//! 6. Impute countries and normalize strings

pub mod classifier;
pub mod column_mapping;
pub mod country;
pub mod field_parsers;
pub mod reader;

#[cfg(test)]
mod tests;

use self::classifier::TypeClassifier;
use self::column_mapping::{ColumnLayout, ColumnMapper};
use self::country::CountryImputer;
use self::field_parsers::{
    TonnageSplitter, coerce_float, coerce_integer, coerce_year, derive_age, normalize_string,
    resolve_name,
};
use self::reader::{RawTable, read_table};

use crate::config::IntegrationConfig;
use crate::error::{IntegrationError, Result};
use crate::header::{extract_year, locate_header_line, require_year};
use crate::models::{FileSchemaReport, HarmonizedFile, ShipRecord};
use std::path::Path;
use tracing::{debug, info};

/// Converts yearly source files into canonical records
#[derive(Debug, Clone)]
pub struct Harmonizer {
    mapper: ColumnMapper,
    classifier: TypeClassifier,
    country_imputer: CountryImputer,
    tonnage: TonnageSplitter,
    header_keywords: Vec<String>,
    null_tokens: Vec<String>,
}

impl Harmonizer {
    /// Build a harmonizer from configuration tables
    pub fn new(config: &IntegrationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            mapper: ColumnMapper::new(config.column_mapping.clone()),
            classifier: TypeClassifier::new(config.type_rules.clone()),
            country_imputer: CountryImputer::new(config.country_rules.clone()),
            tonnage: TonnageSplitter::new(&config.gt_pattern, &config.ldt_pattern)?,
            header_keywords: config.header_keywords.clone(),
            null_tokens: config.null_tokens.clone(),
        })
    }

    /// Harmonize one file
    ///
    /// Returns `MissingYear` or `FileParse` for file-level problems; the
    /// caller decides how to report them.
    pub fn harmonize_file(&self, file_path: &Path) -> Result<HarmonizedFile> {
        let year = require_year(file_path)?;
        info!("Processing: {} [Year: {}]", display_name(file_path), year);

        let table = self.read_raw_table(file_path)?;
        let headers = self.mapper.map_headers(&table.headers);
        let layout = ColumnLayout::from_headers(&headers);

        if layout.imo.is_none() {
            debug!("{} has no IMO column; its rows will be dropped", file_path.display());
        }

        let records: Vec<ShipRecord> = (0..table.rows.len())
            .map(|row| self.harmonize_row(&table, &layout, row, year))
            .collect();

        debug!(
            "Harmonized {} rows from {} ({} malformed rows discarded)",
            records.len(),
            file_path.display(),
            table.rows_discarded
        );

        Ok(HarmonizedFile {
            path: file_path.to_path_buf(),
            year,
            records,
            rows_discarded: table.rows_discarded,
        })
    }

    /// Describe how a file's columns map without harmonizing its rows
    pub fn inspect_file(&self, file_path: &Path) -> FileSchemaReport {
        let mut report = FileSchemaReport {
            file_name: display_name(file_path),
            year: extract_year(file_path),
            header_line: 0,
            columns: Vec::new(),
            unmapped: Vec::new(),
            data_rows: 0,
            error: None,
        };

        let content = match std::fs::read(file_path) {
            Ok(content) => content,
            Err(e) => {
                report.error = Some(e.to_string());
                return report;
            }
        };
        report.header_line = locate_header_line(&content, &self.header_keywords);

        match read_table(file_path, &content, report.header_line, &self.null_tokens) {
            Ok(table) => {
                for label in &table.headers {
                    let mapped = self.mapper.map_label(label);
                    if !ColumnMapper::is_source_column(&mapped) {
                        report.unmapped.push(label.clone());
                    }
                    report.columns.push((label.clone(), mapped));
                }
                report.data_rows = table.rows.len();
            }
            Err(e) => report.error = Some(e.to_string()),
        }

        report
    }

    fn read_raw_table(&self, file_path: &Path) -> Result<RawTable> {
        let content = std::fs::read(file_path).map_err(|e| IntegrationError::FileParse {
            path: file_path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let header_line = locate_header_line(&content, &self.header_keywords);
        read_table(file_path, &content, header_line, &self.null_tokens)
    }

    /// Derive one canonical record from a raw row
    fn harmonize_row(
        &self,
        table: &RawTable,
        layout: &ColumnLayout,
        row: usize,
        year: i32,
    ) -> ShipRecord {
        let cell = |column: Option<usize>| table.cell(row, column);

        let (gt, ldt) = if layout.has_mixed_tonnage() {
            self.tonnage.split(cell(layout.gt_ldt_mixed))
        } else {
            (
                cell(layout.gt).map(str::to_string),
                cell(layout.ldt).map(str::to_string),
            )
        };

        let name = resolve_name(cell(layout.name), cell(layout.owner_name));
        let ship_type = self.classifier.classify(cell(layout.ship_type));

        let built = coerce_year(cell(layout.built));
        let country = self
            .country_imputer
            .impute(cell(layout.country), cell(layout.place));

        ShipRecord {
            year,
            imo: coerce_integer(cell(layout.imo)),
            name: normalize_string(name.as_deref()),
            ship_type,
            gt: coerce_float(gt.as_deref()),
            ldt: coerce_float(ldt.as_deref()),
            built,
            age: derive_age(year, built),
            last_flag: normalize_string(cell(layout.last_flag)),
            place: normalize_string(cell(layout.place)),
            country: normalize_string(Some(&country)),
        }
    }
}

fn display_name(file_path: &Path) -> String {
    file_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| file_path.display().to_string())
}
