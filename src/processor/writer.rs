//! CSV writing module for the unified table
//!
//! Assembles the final records into a polars `DataFrame` in canonical
//! column order and writes it once with polars' CSV writer. Null numeric
//! values serialize as empty fields.

use crate::constants::columns;
use crate::error::Result;
use crate::models::ShipRecord;

use polars::prelude::*;
use std::fs::File;
use std::path::PathBuf;
use tracing::debug;

/// Writer for the unified output file
#[derive(Debug)]
pub struct UnifiedWriter {
    output_path: PathBuf,
}

impl UnifiedWriter {
    /// Create a new writer
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Write all records; returns the frame that was written
    pub fn write(&self, records: &[ShipRecord]) -> Result<DataFrame> {
        let mut df = records_to_dataframe(records)?;

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = File::create(&self.output_path)?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .with_separator(b',')
            .finish(&mut df)?;

        debug!(
            "Wrote {} rows to {}",
            df.height(),
            self.output_path.display()
        );
        Ok(df)
    }
}

/// Canonical-schema frame: YEAR, IMO, NAME, TYPE, GT, LDT, BUILT, AGE,
/// LAST_FLAG, PLACE, COUNTRY
pub fn records_to_dataframe(records: &[ShipRecord]) -> Result<DataFrame> {
    let year: Vec<i32> = records.iter().map(|r| r.year).collect();
    let imo: Vec<Option<i64>> = records.iter().map(|r| r.imo).collect();
    let name: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    let ship_type: Vec<&str> = records.iter().map(|r| r.ship_type.label()).collect();
    let gt: Vec<Option<f64>> = records.iter().map(|r| r.gt).collect();
    let ldt: Vec<Option<f64>> = records.iter().map(|r| r.ldt).collect();
    let built: Vec<Option<i32>> = records.iter().map(|r| r.built).collect();
    let age: Vec<Option<i32>> = records.iter().map(|r| r.age).collect();
    let last_flag: Vec<&str> = records.iter().map(|r| r.last_flag.as_str()).collect();
    let place: Vec<&str> = records.iter().map(|r| r.place.as_str()).collect();
    let country: Vec<&str> = records.iter().map(|r| r.country.as_str()).collect();

    let df = df!(
        columns::YEAR => year,
        columns::IMO => imo,
        columns::NAME => name,
        columns::TYPE => ship_type,
        columns::GT => gt,
        columns::LDT => ldt,
        columns::BUILT => built,
        columns::AGE => age,
        columns::LAST_FLAG => last_flag,
        columns::PLACE => place,
        columns::COUNTRY => country
    )?;

    Ok(df)
}
