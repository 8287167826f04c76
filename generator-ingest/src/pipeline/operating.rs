use std::collections::HashSet;

use generator_model::domain::{DatasetKind, GeneratorRecord};

use crate::{
    transform::{coerce, columns::STANDARD_RENAMES, normalize_headers, FuelClassifier},
    vintage::Vintage,
};

use super::{PipelineError, TabularSource};

pub const OPERATING_STATUS: &str = "OP";
pub const OPERATING_SECTORS: [&str; 3] = ["Electric Utility", "IPP Non-CHP", "IPP"];

/// Operating generators for one reporting year.
///
/// The generator key is checked across the whole sheet before the status and
/// sector filters drop anything; a repeated key fails the build.
pub fn build<S>(source: &S, vintage: &Vintage) -> Result<Vec<GeneratorRecord>, PipelineError>
where
    S: TabularSource + ?Sized,
{
    let sheet = &vintage.operating;
    let mut table = source.open_sheet(vintage.year, sheet.name, sheet.header_skip_rows)?;
    normalize_headers(&mut table, vintage.operating_headers, &STANDARD_RENAMES);

    let plant_code = table.require("plant_code")?;
    let generator_id = table.require("generator_id")?;
    let utility_name = table.require("utility_name")?;
    let plant_name = table.require("plant_name")?;
    let state = table.require("state")?;
    let county = table.require("county")?;
    let status = table.require("status")?;
    let sector = table.require("sector")?;
    let nameplate = table.require("nameplate_capacity")?;
    let energy_source_1 = table.require("energy_source_1")?;
    let operating_year = table.require("operating_year")?;
    let planned_retirement = table.require("planned_retirement_year")?;

    let mut seen = HashSet::with_capacity(table.len());
    let mut fuels = FuelClassifier::default();
    let mut out = Vec::new();

    for row in &table.rows {
        let generator_uuid = format!("{}_{}", row[plant_code].as_text(), row[generator_id].as_text());
        if !seen.insert(generator_uuid.clone()) {
            return Err(PipelineError::DuplicateKey {
                year: vintage.year,
                generator_uuid,
            });
        }

        let planned_retirement_year =
            coerce::optional_f64(&row[planned_retirement], "planned_retirement_year")?;

        let row_status = row[status].as_text();
        let row_sector = row[sector].as_text();
        if row_status.trim() != OPERATING_STATUS || !OPERATING_SECTORS.contains(&row_sector.trim()) {
            continue;
        }

        let energy_source_1 = row[energy_source_1].as_text();
        out.push(GeneratorRecord {
            generator_uuid,
            utility_name: row[utility_name].as_text(),
            plant_name: row[plant_name].as_text(),
            state: row[state].as_text(),
            county: row[county].as_text(),
            status: row_status,
            sector: row_sector,
            nameplate_capacity: coerce::optional_f64(&row[nameplate], "nameplate_capacity")?,
            energy_source: fuels.classify(&energy_source_1),
            energy_source_1,
            operating_year: coerce::optional_year(&row[operating_year], "operating_year")?,
            planned_retirement_year,
        });
    }

    fuels.report(DatasetKind::Operating, vintage.year);
    metrics::counter!("generator_rows_read_total", "dataset" => "operating")
        .increment(table.len() as u64);
    metrics::counter!("generator_rows_emitted_total", "dataset" => "operating")
        .increment(out.len() as u64);
    tracing::info!(
        year = vintage.year,
        rows_read = table.len(),
        rows_emitted = out.len(),
        "operating generators built"
    );

    Ok(out)
}
