//! Column mapping from per-file labels to the canonical vocabulary
//!
//! Each yearly report names its columns differently. The mapper trims every
//! label and renames it through the synonym table; labels without a synonym
//! pass through unchanged and are dropped later if they are not canonical.

use crate::constants::{SOURCE_COLUMNS, columns};
use std::collections::HashMap;

/// Synonym-driven column renamer
#[derive(Debug, Clone)]
pub struct ColumnMapper {
    synonyms: HashMap<String, String>,
}

impl ColumnMapper {
    pub fn new(synonyms: HashMap<String, String>) -> Self {
        Self { synonyms }
    }

    /// Canonical name for a raw label (trimmed label if no synonym applies)
    pub fn map_label(&self, label: &str) -> String {
        let trimmed = label.trim();
        self.synonyms
            .get(trimmed)
            .cloned()
            .unwrap_or_else(|| trimmed.to_string())
    }

    /// Rename every label, preserving order
    pub fn map_headers(&self, headers: &[String]) -> Vec<String> {
        headers.iter().map(|h| self.map_label(h)).collect()
    }

    /// Whether a mapped label survives projection
    pub fn is_source_column(label: &str) -> bool {
        SOURCE_COLUMNS.contains(&label)
    }
}

/// Column positions of the canonical fields within one file
///
/// Canonical columns the file lacks resolve to `None`, which reads as an
/// all-null column. The first occurrence wins when labels collide.
#[derive(Debug, Clone, Default)]
pub struct ColumnLayout {
    pub imo: Option<usize>,
    pub name: Option<usize>,
    pub ship_type: Option<usize>,
    pub gt: Option<usize>,
    pub ldt: Option<usize>,
    pub built: Option<usize>,
    pub last_flag: Option<usize>,
    pub place: Option<usize>,
    pub country: Option<usize>,
    pub owner_name: Option<usize>,
    pub gt_ldt_mixed: Option<usize>,
}

impl ColumnLayout {
    /// Resolve canonical positions from mapped headers
    pub fn from_headers(headers: &[String]) -> Self {
        let find = |name: &str| headers.iter().position(|h| h == name);
        Self {
            imo: find(columns::IMO),
            name: find(columns::NAME),
            ship_type: find(columns::TYPE),
            gt: find(columns::GT),
            ldt: find(columns::LDT),
            built: find(columns::BUILT),
            last_flag: find(columns::LAST_FLAG),
            place: find(columns::PLACE),
            country: find(columns::COUNTRY),
            owner_name: find(columns::OWNER_NAME),
            gt_ldt_mixed: find(columns::GT_LDT_MIXED),
        }
    }

    /// True when tonnage must be split out of the combined column
    pub fn has_mixed_tonnage(&self) -> bool {
        self.gt_ldt_mixed.is_some()
    }
}
