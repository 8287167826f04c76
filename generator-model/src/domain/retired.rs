use serde::Serialize;

use super::fuel::EnergySource;

/// A retired generator. Numeric columns are always present and whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetiredRecord {
    pub utility_name: String,
    pub plant_name: String,
    pub plant_code: String,
    pub state: String,
    pub county: String,
    pub nameplate_capacity: i64,
    pub energy_source: EnergySource,
    pub operating_year: i32,
    pub retirement_year: i32,
}

impl RetiredRecord {
    /// Output column order.
    pub const COLUMNS: [&'static str; 9] = [
        "utility_name",
        "plant_name",
        "plant_code",
        "state",
        "county",
        "nameplate_capacity",
        "energy_source",
        "operating_year",
        "retirement_year",
    ];
}
