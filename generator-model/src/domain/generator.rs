use serde::Serialize;

use super::fuel::EnergySource;

/// An operating generator. `generator_uuid` is `<plant_code>_<generator_id>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratorRecord {
    pub generator_uuid: String,
    pub utility_name: String,
    pub plant_name: String,
    pub state: String,
    pub county: String,
    pub status: String,
    pub sector: String,
    /// Megawatts.
    pub nameplate_capacity: Option<f64>,
    pub energy_source_1: String,
    pub operating_year: Option<i32>,
    pub planned_retirement_year: Option<f64>,
    pub energy_source: EnergySource,
}

impl GeneratorRecord {
    /// Output column order.
    pub const COLUMNS: [&'static str; 12] = [
        "generator_uuid",
        "utility_name",
        "plant_name",
        "state",
        "county",
        "status",
        "sector",
        "nameplate_capacity",
        "energy_source_1",
        "operating_year",
        "planned_retirement_year",
        "energy_source",
    ];
}
