//! Field-level parsing and derivation
//!
//! Small, total functions applied to one record at a time: tonnage
//! splitting, name fallback, numeric coercion, age derivation and string
//! normalization. None of them fail; unusable input becomes `None`.

use crate::constants::{NAME_PLACEHOLDERS, SENTINEL};
use crate::error::Result;
use regex::Regex;

/// Splits a combined "GT / LDT" field into its two tonnages
#[derive(Debug, Clone)]
pub struct TonnageSplitter {
    gt: Regex,
    ldt: Regex,
}

impl TonnageSplitter {
    pub fn new(gt_pattern: &str, ldt_pattern: &str) -> Result<Self> {
        Ok(Self {
            gt: Regex::new(gt_pattern)?,
            ldt: Regex::new(ldt_pattern)?,
        })
    }

    /// Raw GT and LDT text captured from the combined field
    pub fn split(&self, mixed: Option<&str>) -> (Option<String>, Option<String>) {
        match mixed {
            Some(value) => (capture(&self.gt, value), capture(&self.ldt, value)),
            None => (None, None),
        }
    }
}

fn capture(pattern: &Regex, value: &str) -> Option<String> {
    pattern
        .captures(value)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Vessel name, falling back to the owner when the name is a placeholder
pub fn resolve_name(name: Option<&str>, owner_name: Option<&str>) -> Option<String> {
    match name.map(str::trim) {
        Some(trimmed) if !NAME_PLACEHOLDERS.contains(&trimmed) => Some(trimmed.to_string()),
        _ => owner_name.map(str::to_string),
    }
}

/// Parse a float, `None` for missing or unparsable text
pub fn coerce_float(value: Option<&str>) -> Option<f64> {
    value
        .map(str::trim)
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Parse an integer, accepting float notation and truncating toward zero
pub fn coerce_integer(value: Option<&str>) -> Option<i64> {
    let trimmed = value.map(str::trim)?;
    if let Ok(v) = trimmed.parse::<i64>() {
        return Some(v);
    }
    coerce_float(Some(trimmed))
        .filter(|v| v.abs() < i64::MAX as f64)
        .map(|v| v.trunc() as i64)
}

/// Build year as a calendar year
pub fn coerce_year(value: Option<&str>) -> Option<i32> {
    coerce_integer(value).and_then(|v| i32::try_from(v).ok())
}

/// Vessel age at the reporting year
pub fn derive_age(year: i32, built: Option<i32>) -> Option<i32> {
    built.and_then(|b| year.checked_sub(b))
}

/// Trim and substitute the sentinel for missing or blank values
pub fn normalize_string(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => SENTINEL.to_string(),
    }
}
