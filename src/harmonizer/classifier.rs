//! Ship type classification
//!
//! Maps free-text ship types onto [`ShipType`] with an ordered list of
//! keyword rules. The first rule with a matching keyword decides the label,
//! so a type such as "tanker supply" is a Tanker because the tanker rule
//! comes first.

use crate::config::TypeRule;
use crate::models::ShipType;

#[derive(Debug, Clone)]
pub struct TypeClassifier {
    rules: Vec<TypeRule>,
}

impl TypeClassifier {
    /// Keywords are lower-cased once so matching is case-insensitive
    pub fn new(rules: Vec<TypeRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|rule| TypeRule {
                label: rule.label,
                keywords: rule.keywords.iter().map(|k| k.to_lowercase()).collect(),
            })
            .collect();
        Self { rules }
    }

    pub fn classify(&self, raw_type: Option<&str>) -> ShipType {
        let lowered = raw_type
            .map(str::to_lowercase)
            .unwrap_or_else(|| "unknown".to_string());

        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| lowered.contains(k.as_str())))
            .map(|rule| rule.label)
            .unwrap_or(ShipType::Other)
    }
}
