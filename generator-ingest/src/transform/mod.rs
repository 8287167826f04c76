use std::collections::BTreeSet;

use generator_model::domain::{classify, DatasetKind, EnergySource};

pub mod coerce;
pub mod columns;
pub mod fixups;

pub use columns::{canonical_name, normalize, normalize_headers, HeaderStyle};

/// Fuel classification for one build that keeps track of codes it could not
/// map. Unknown codes are passed through, never rejected.
#[derive(Debug, Default)]
pub struct FuelClassifier {
    unclassified: BTreeSet<String>,
}

impl FuelClassifier {
    pub fn classify(&mut self, raw_code: &str) -> EnergySource {
        let source = classify(raw_code);
        if let EnergySource::Unclassified(code) = &source {
            if !code.trim().is_empty() && self.unclassified.insert(code.clone()) {
                metrics::counter!("fuel_code_unclassified_total").increment(1);
            }
        }
        source
    }

    pub fn unclassified(&self) -> impl Iterator<Item = &str> {
        self.unclassified.iter().map(String::as_str)
    }

    pub fn report(&self, dataset: DatasetKind, year: u16) {
        if self.unclassified.is_empty() {
            return;
        }
        tracing::warn!(
            %dataset,
            year,
            codes = ?self.unclassified,
            "unclassified fuel codes passed through"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_each_unknown_code_once() {
        let mut fuels = FuelClassifier::default();
        assert_eq!(fuels.classify("NG").as_str(), "natural gas");
        assert_eq!(fuels.classify("XX").as_str(), "XX");
        fuels.classify("XX");
        fuels.classify("");
        assert_eq!(fuels.unclassified().collect::<Vec<_>>(), vec!["XX"]);
    }
}
