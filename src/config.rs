//! Configuration management and validation.
//!
//! Holds the lookup tables that drive harmonization: column synonyms,
//! header keywords, ship-type rules, country keywords, tonnage patterns
//! and missing-value tokens. Defaults reproduce the built-in tables; a
//! JSON file can override any subset of them.

use crate::constants;
use crate::error::{IntegrationError, Result};
use crate::models::ShipType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Ordered ship-type rule: any keyword contained in the lower-cased type wins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeRule {
    pub label: ShipType,
    pub keywords: Vec<String>,
}

/// Ordered country rule: any keyword contained in the lower-cased place wins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRule {
    pub country: String,
    pub keywords: Vec<String>,
}

/// Global configuration for integration runs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationConfig {
    /// Observed header label (after trimming) to canonical column
    pub column_mapping: HashMap<String, String>,

    /// Substrings that mark the real header line
    pub header_keywords: Vec<String>,

    /// Ship-type rules in evaluation order
    pub type_rules: Vec<TypeRule>,

    /// Country rules in evaluation order
    pub country_rules: Vec<CountryRule>,

    /// Pattern whose first capture group is the gross tonnage
    pub gt_pattern: String,

    /// Pattern whose first capture group is the light displacement tonnage
    pub ldt_pattern: String,

    /// Raw values read as missing
    pub null_tokens: Vec<String>,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        let column_mapping = constants::COLUMN_SYNONYMS
            .iter()
            .map(|(from, to)| (from.trim().to_string(), to.to_string()))
            .collect();

        let type_rules = constants::TYPE_RULES
            .iter()
            .filter_map(|(label, keywords)| {
                ShipType::from_label(label).map(|label| TypeRule {
                    label,
                    keywords: keywords.iter().map(|k| k.to_string()).collect(),
                })
            })
            .collect();

        let country_rules = constants::COUNTRY_RULES
            .iter()
            .map(|(country, keywords)| CountryRule {
                country: country.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            })
            .collect();

        Self {
            column_mapping,
            header_keywords: to_strings(constants::HEADER_KEYWORDS),
            type_rules,
            country_rules,
            gt_pattern: constants::GT_PATTERN.to_string(),
            ldt_pattern: constants::LDT_PATTERN.to_string(),
            null_tokens: to_strings(constants::NULL_TOKENS),
        }
    }
}

impl IntegrationConfig {
    /// Load a JSON override file; keys it omits keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&content)?;
        config.column_mapping = trim_keys(std::mem::take(&mut config.column_mapping));
        config.validate()?;
        debug!(
            "Loaded configuration from {}: {} synonyms, {} type rules, {} country rules",
            path.display(),
            config.column_mapping.len(),
            config.type_rules.len(),
            config.country_rules.len()
        );
        Ok(config)
    }

    /// Replace the column synonym table
    pub fn with_column_mapping(mut self, mapping: HashMap<String, String>) -> Self {
        self.column_mapping = trim_keys(mapping);
        self
    }

    /// Add or replace a single synonym
    pub fn with_synonym(mut self, label: impl Into<String>, canonical: impl Into<String>) -> Self {
        let label: String = label.into();
        self.column_mapping
            .insert(label.trim().to_string(), canonical.into());
        self
    }

    /// Replace the header keywords
    pub fn with_header_keywords(mut self, keywords: Vec<String>) -> Self {
        self.header_keywords = keywords;
        self
    }

    /// Replace the ship-type rules
    pub fn with_type_rules(mut self, rules: Vec<TypeRule>) -> Self {
        self.type_rules = rules;
        self
    }

    /// Replace the country rules
    pub fn with_country_rules(mut self, rules: Vec<CountryRule>) -> Self {
        self.country_rules = rules;
        self
    }

    /// Check that every synonym targets a column the harmonizer understands
    pub fn validate(&self) -> Result<()> {
        let known: Vec<&str> = constants::SOURCE_COLUMNS.to_vec();
        let mut unknown: Vec<&str> = self
            .column_mapping
            .values()
            .map(String::as_str)
            .filter(|target| !known.contains(target))
            .collect();

        if !unknown.is_empty() {
            unknown.sort_unstable();
            unknown.dedup();
            return Err(IntegrationError::Configuration {
                message: format!("column mapping targets unknown columns: {}", unknown.join(", ")),
            });
        }

        if self.header_keywords.iter().any(|k| k.is_empty()) {
            return Err(IntegrationError::Configuration {
                message: "header keywords must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Labels are matched after trimming, so keys are stored trimmed
fn trim_keys(mapping: HashMap<String, String>) -> HashMap<String, String> {
    mapping
        .into_iter()
        .map(|(label, canonical)| (label.trim().to_string(), canonical))
        .collect()
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
