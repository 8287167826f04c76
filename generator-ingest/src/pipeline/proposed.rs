use generator_model::domain::{DatasetKind, ProposedRecord};

use crate::{
    transform::{coerce, columns::STANDARD_RENAMES, normalize_headers, FuelClassifier, HeaderStyle},
    vintage::Vintage,
};

use super::{PipelineError, TabularSource};

pub const PROPOSED_SECTORS: [&str; 2] = ["IPP Non-CHP", "Electric Utility"];

/// Regulatory approvals received or construction under way. Earlier
/// planning stages are left out.
pub const PROPOSED_STATUSES: [&str; 4] = ["TS", "V", "U", "T"];

pub fn build<S>(source: &S, vintage: &Vintage) -> Result<Vec<ProposedRecord>, PipelineError>
where
    S: TabularSource + ?Sized,
{
    let sheet = &vintage.proposed;
    let mut table = source.open_sheet(vintage.year, sheet.name, sheet.header_skip_rows)?;
    normalize_headers(&mut table, HeaderStyle::Snake, &STANDARD_RENAMES);

    let utility_name = table.require("utility_name")?;
    let plant_name = table.require("plant_name")?;
    let plant_code = table.require("plant_code")?;
    let state = table.require("state")?;
    let county = table.require("county")?;
    let nameplate = table.require("nameplate_capacity")?;
    let status = table.require("status")?;
    let energy_source_1 = table.require("energy_source_1")?;
    let effective_year = table.require("effective_year")?;
    let sector = table.require("sector")?;

    let mut fuels = FuelClassifier::default();
    let mut out = Vec::new();

    for row in &table.rows {
        let row_status = row[status].as_text();
        let row_sector = row[sector].as_text();
        if !PROPOSED_SECTORS.contains(&row_sector.trim())
            || !PROPOSED_STATUSES.contains(&row_status.trim())
        {
            continue;
        }

        let energy_source_1 = row[energy_source_1].as_text();
        out.push(ProposedRecord {
            utility_name: row[utility_name].as_text(),
            plant_name: row[plant_name].as_text(),
            plant_code: row[plant_code].as_text(),
            state: row[state].as_text(),
            county: row[county].as_text(),
            nameplate_capacity: coerce::optional_f64(&row[nameplate], "nameplate_capacity")?,
            status: row_status,
            energy_source: fuels.classify(&energy_source_1),
            energy_source_1,
            effective_year: coerce::optional_f64(&row[effective_year], "effective_year")?,
            sector: row_sector,
        });
    }

    fuels.report(DatasetKind::Proposed, vintage.year);
    metrics::counter!("generator_rows_read_total", "dataset" => "proposed")
        .increment(table.len() as u64);
    metrics::counter!("generator_rows_emitted_total", "dataset" => "proposed")
        .increment(out.len() as u64);
    tracing::info!(
        year = vintage.year,
        rows_read = table.len(),
        rows_emitted = out.len(),
        "proposed generators built"
    );

    Ok(out)
}
