//! Country imputation from scrapping place names.

use crate::config::CountryRule;
use crate::constants::SENTINEL;

#[derive(Debug, Clone)]
pub struct CountryImputer {
    rules: Vec<CountryRule>,
}

impl CountryImputer {
    pub fn new(rules: Vec<CountryRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|rule| CountryRule {
                country: rule.country,
                keywords: rule.keywords.iter().map(|k| k.to_lowercase()).collect(),
            })
            .collect();
        Self { rules }
    }

    /// Keep a present country, otherwise infer one from the place
    pub fn impute(&self, country: Option<&str>, place: Option<&str>) -> String {
        match country {
            Some(country) => country.to_string(),
            None => self.infer(place),
        }
    }

    /// Country implied by a place name, the sentinel when nothing matches
    pub fn infer(&self, place: Option<&str>) -> String {
        let Some(place) = place else {
            return SENTINEL.to_string();
        };
        let lowered = place.to_lowercase();

        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| lowered.contains(k.as_str())))
            .map(|rule| rule.country.clone())
            .unwrap_or_else(|| SENTINEL.to_string())
    }
}
