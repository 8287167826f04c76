use crate::{
    pipeline::PipelineError,
    table::{Cell, RawTable},
};

use super::coerce::kilowatts_to_megawatts;

/// Pre-2001 existing-generator sheets list month and year columns in the
/// opposite order from their labels and prefix unit fields with `existing_`.
pub const PRE_2001_RENAMES: [(&str, &str); 7] = [
    ("operating_month", "operating_year"),
    ("operating_year", "operating_month"),
    ("retirement_month", "retirement_year"),
    ("retirement_year", "retirement_month"),
    ("existing_nameplate", "nameplate_capacity"),
    ("existing_energy_source_1", "energy_source_1"),
    ("existing_status", "status"),
];

const PRE_2001_ABSENT_TEXT_COLUMNS: [&str; 4] = ["utility_name", "plant_name", "state", "county"];

/// Reshape a pre-2001 retired sheet into the canonical layout.
///
/// Every unit is an electric utility unit, nameplate is reported in kW and
/// the descriptive columns do not exist.
pub fn pre_2001_retired(table: &mut RawTable) -> Result<(), PipelineError> {
    table.set_column("sector", Cell::text("Electric Utility"));
    table.rename_columns(&PRE_2001_RENAMES);
    for column in PRE_2001_ABSENT_TEXT_COLUMNS {
        table.set_column(column, Cell::text(""));
    }
    table.try_map_column("nameplate_capacity", |cell| {
        kilowatts_to_megawatts(cell, "nameplate_capacity")
    })
}
