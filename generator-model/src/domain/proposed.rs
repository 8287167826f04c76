use serde::Serialize;

use super::fuel::EnergySource;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProposedRecord {
    pub utility_name: String,
    pub plant_name: String,
    pub plant_code: String,
    pub state: String,
    pub county: String,
    pub nameplate_capacity: Option<f64>,
    pub status: String,
    pub energy_source_1: String,
    /// Planned commissioning year.
    pub effective_year: Option<f64>,
    pub sector: String,
    pub energy_source: EnergySource,
}

impl ProposedRecord {
    /// Output column order.
    pub const COLUMNS: [&'static str; 11] = [
        "utility_name",
        "plant_name",
        "plant_code",
        "state",
        "county",
        "nameplate_capacity",
        "status",
        "energy_source_1",
        "effective_year",
        "sector",
        "energy_source",
    ];
}
