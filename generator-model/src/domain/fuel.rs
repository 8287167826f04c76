use std::fmt;

use serde::{Serialize, Serializer};

/// Broad fuel category a generator's primary energy source rolls up into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FuelCategory {
    #[serde(rename = "natural gas")]
    NaturalGas,
    #[serde(rename = "coal")]
    Coal,
    #[serde(rename = "nuclear")]
    Nuclear,
    #[serde(rename = "hydro")]
    Hydro,
    #[serde(rename = "wind")]
    Wind,
    #[serde(rename = "oil")]
    Oil,
    #[serde(rename = "other")]
    Other,
    #[serde(rename = "by-products")]
    ByProducts,
    #[serde(rename = "solar")]
    Solar,
    #[serde(rename = "storage")]
    Storage,
}

impl FuelCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NaturalGas => "natural gas",
            Self::Coal => "coal",
            Self::Nuclear => "nuclear",
            Self::Hydro => "hydro",
            Self::Wind => "wind",
            Self::Oil => "oil",
            Self::Other => "other",
            Self::ByProducts => "by-products",
            Self::Solar => "solar",
            Self::Storage => "storage",
        }
    }
}

impl fmt::Display for FuelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use FuelCategory::{ByProducts, Coal, Hydro, NaturalGas, Nuclear, Oil, Other, Solar, Storage, Wind};

/// Raw EIA-860 energy source codes and the category each one maps to.
///
/// Covers every code seen in the 2000, 2010 and 2018 inventories. Lookup is
/// case-sensitive.
pub const ENERGY_SOURCE_MAPPING: &[(&str, FuelCategory)] = &[
    ("NG", NaturalGas),
    ("BIT", Coal),
    ("SUB", Coal),
    ("NUC", Nuclear),
    ("WAT", Hydro),
    ("WND", Wind),
    ("RFO", Oil),
    ("DFO", Oil),
    ("LIG", Coal),
    ("GEO", Other),
    ("PC", Oil),
    ("MSW", ByProducts),
    ("WDS", ByProducts),
    ("LFG", ByProducts),
    ("WH", Other),
    ("WC", Coal),
    ("KER", Oil),
    ("SUN", Solar),
    ("SGC", Coal),
    ("JF", Oil),
    ("OBL", ByProducts),
    ("AB", ByProducts),
    ("WO", Oil),
    ("TDF", ByProducts),
    ("OBS", ByProducts),
    ("MWH", Storage),
    ("OBG", ByProducts),
    ("OG", NaturalGas),
    // 2018 vintage
    ("SGP", Oil),
    ("RC", Coal),
    ("OTH", Other),
    ("PG", Oil),
    // pre-2001 vintage
    ("COL", Coal),
    ("PET", Oil),
    ("UNK", Other),
    ("GAS", NaturalGas),
    ("OO", Other),
    ("WOC", Other),
    ("REF", ByProducts),
    ("MF", Other),
];

/// Result of classifying a raw fuel code.
///
/// Codes missing from [`ENERGY_SOURCE_MAPPING`] are carried through verbatim
/// as `Unclassified`, so consumers of the classified column must accept raw
/// codes next to category names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EnergySource {
    Classified(FuelCategory),
    Unclassified(String),
}

impl EnergySource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Classified(category) => category.as_str(),
            Self::Unclassified(raw) => raw,
        }
    }

    pub fn category(&self) -> Option<FuelCategory> {
        match self {
            Self::Classified(category) => Some(*category),
            Self::Unclassified(_) => None,
        }
    }
}

impl fmt::Display for EnergySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EnergySource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Map a raw fuel code to its category, passing unknown codes through.
pub fn classify(raw_code: &str) -> EnergySource {
    ENERGY_SOURCE_MAPPING
        .iter()
        .find(|(code, _)| *code == raw_code)
        .map(|(_, category)| EnergySource::Classified(*category))
        .unwrap_or_else(|| EnergySource::Unclassified(raw_code.to_string()))
}
