use generator_model::domain::{DatasetKind, RetiredRecord};

use crate::{
    table::Cell,
    transform::{coerce, columns::SECTOR_RENAMES, normalize_headers, FuelClassifier, HeaderStyle},
    vintage::Vintage,
};

use super::{PipelineError, TabularSource};

pub const RETIRED_STATUS: &str = "RE";
pub const RETIRED_SECTORS: [&str; 2] = ["IPP Non-CHP", "Electric Utility"];

/// Retired generators for one reporting year.
///
/// Years before 2001 carry retirements inside the existing-generator sheet
/// and go through the vintage's structural fixup first. Operating year,
/// retirement year and nameplate must be present on every retired row.
pub fn build<S>(source: &S, vintage: &Vintage) -> Result<Vec<RetiredRecord>, PipelineError>
where
    S: TabularSource + ?Sized,
{
    let sheet = &vintage.retired;
    let mut table = source.open_sheet(vintage.year, sheet.name, sheet.header_skip_rows)?;
    normalize_headers(&mut table, HeaderStyle::Snake, &SECTOR_RENAMES);
    if let Some(fixup) = vintage.retired_fixup {
        fixup(&mut table)?;
    }

    let status = table.require("status")?;
    let sector = table.require("sector")?;
    let energy_source_1 = table.require("energy_source_1")?;
    let utility_name = table.require("utility_name")?;
    let plant_name = table.require("plant_name")?;
    let plant_code = table.require("plant_code")?;
    let state = table.require("state")?;
    let county = table.require("county")?;
    let nameplate = table.require("nameplate_capacity")?;
    let operating_year = table.require("operating_year")?;
    let retirement_year = table.require("retirement_year")?;

    let mut fuels = FuelClassifier::default();
    let mut out = Vec::new();

    for (idx, row) in table.rows.iter().enumerate() {
        if row[status].as_text().trim() != RETIRED_STATUS
            || !RETIRED_SECTORS.contains(&row[sector].as_text().trim())
        {
            continue;
        }

        out.push(RetiredRecord {
            utility_name: row[utility_name].as_text(),
            plant_name: row[plant_name].as_text(),
            plant_code: row[plant_code].as_text(),
            state: row[state].as_text(),
            county: row[county].as_text(),
            nameplate_capacity: coerce::required_rounded(&row[nameplate], "nameplate_capacity", idx)?,
            energy_source: fuels.classify(&row[energy_source_1].as_text()),
            operating_year: year(&row[operating_year], "operating_year", idx)?,
            retirement_year: year(&row[retirement_year], "retirement_year", idx)?,
        });
    }

    fuels.report(DatasetKind::Retired, vintage.year);
    metrics::counter!("generator_rows_read_total", "dataset" => "retired")
        .increment(table.len() as u64);
    metrics::counter!("generator_rows_emitted_total", "dataset" => "retired")
        .increment(out.len() as u64);
    tracing::info!(
        year = vintage.year,
        rows_read = table.len(),
        rows_emitted = out.len(),
        "retired generators built"
    );

    Ok(out)
}

/// A required year column, rounded and checked to fit an `i32`.
fn year(cell: &Cell, column: &str, row: usize) -> Result<i32, PipelineError> {
    let value = coerce::required_rounded(cell, column, row)?;
    i32::try_from(value).map_err(|_| PipelineError::InvalidValue {
        column: column.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::InMemorySource;

    fn t(s: &str) -> Cell {
        Cell::text(s)
    }

    fn n(v: f64) -> Cell {
        Cell::Number(v)
    }

    fn source_2000(rows: Vec<Vec<Cell>>) -> InMemorySource {
        // Labels as published: month and year columns are reversed.
        let headers = [
            "PLANT_CODE",
            "GENERATOR_ID",
            "EXISTING_NAMEPLATE",
            "EXISTING_ENERGY_SOURCE_1",
            "EXISTING_STATUS",
            "OPERATING_MONTH",
            "OPERATING_YEAR",
            "RETIREMENT_MONTH",
            "RETIREMENT_YEAR",
        ];
        let mut sheet = vec![headers.iter().map(|h| t(h)).collect::<Vec<_>>()];
        sheet.extend(rows);
        InMemorySource::new().with_sheet(2000, "Existing Generators", sheet)
    }

    fn source_2018(rows: Vec<Vec<Cell>>) -> InMemorySource {
        let headers = [
            "Utility Name",
            "Plant Name",
            "Plant Code",
            "State",
            "County",
            "Sector Name",
            "Sector",
            "Nameplate Capacity (MW)",
            "Status",
            "Energy Source 1",
            "Operating Year",
            "Retirement Year",
        ];
        let mut sheet = vec![
            vec![t("Form EIA-860 Data - Schedule 3, 'Generator Data' (Retired & Canceled Units Only)")],
            headers.iter().map(|h| t(h)).collect(),
        ];
        sheet.extend(rows);
        InMemorySource::new().with_sheet(2018, "Retired and Canceled", sheet)
    }

    fn row_2018(status: &str, sector: &str, nameplate: Cell, retired: Cell) -> Vec<Cell> {
        vec![
            t("Utility"),
            t("Plant"),
            n(42.0),
            t("PA"),
            t("Allegheny"),
            t(sector),
            n(1.0),
            nameplate,
            t(status),
            t("BIT"),
            n(1958.0),
            retired,
        ]
    }

    #[test]
    fn pre_2001_nameplate_is_scaled_to_megawatts_and_rounded() {
        let source = source_2000(vec![
            vec![n(10.0), t("1"), n(2500.0), t("COL"), t("RE"), n(1962.0), n(6.0), n(1999.0), n(12.0)],
            vec![n(11.0), t("1"), n(1500.0), t("GAS"), t("RE"), n(1970.0), n(1.0), n(2000.0), n(3.0)],
            vec![n(12.0), t("1"), n(123_700.0), t("PET"), t("RE"), n(1955.0), n(4.0), n(1998.0), n(9.0)],
        ]);
        let out = build(&source, Vintage::for_year(2000).unwrap()).unwrap();

        let nameplates: Vec<_> = out.iter().map(|r| r.nameplate_capacity).collect();
        assert_eq!(nameplates, vec![2, 2, 124]);
        // the published "month" columns hold the years
        assert_eq!(out[0].operating_year, 1962);
        assert_eq!(out[0].retirement_year, 1999);
        assert_eq!(out[0].energy_source.as_str(), "coal");
        assert_eq!(out[1].energy_source.as_str(), "natural gas");
        assert_eq!(out[0].utility_name, "");
        assert_eq!(out[0].plant_code, "10");
    }

    #[test]
    fn pre_2001_keeps_only_retired_units() {
        let source = source_2000(vec![
            vec![n(10.0), t("1"), n(5000.0), t("COL"), t("OP"), n(1962.0), n(6.0), t(" "), t(" ")],
            vec![n(11.0), t("1"), n(7000.0), t("WAT"), t("RE"), n(1930.0), n(5.0), n(1997.0), n(1.0)],
        ]);
        let out = build(&source, Vintage::for_year(2000).unwrap()).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].plant_code, "11");
        assert_eq!(out[0].energy_source.as_str(), "hydro");
    }

    #[test]
    fn modern_sheet_filters_status_and_sector() {
        let source = source_2018(vec![
            row_2018("RE", "Electric Utility", n(75.4), n(2015.0)),
            row_2018("CN", "Electric Utility", n(80.0), t(" ")),
            row_2018("RE", "Commercial Non-CHP", n(5.0), n(2016.0)),
            row_2018("RE", "IPP Non-CHP", n(12.5), n(2017.0)),
        ]);
        let out = build(&source, Vintage::for_year(2018).unwrap()).unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].nameplate_capacity, 75);
        assert_eq!(out[0].retirement_year, 2015);
        assert_eq!(out[0].utility_name, "Utility");
        assert_eq!(out[1].nameplate_capacity, 12);
        assert_eq!(out[1].operating_year, 1958);
    }

    #[test]
    fn blank_required_value_on_a_retired_row_fails() {
        let source = source_2018(vec![row_2018("RE", "Electric Utility", n(75.0), t(" "))]);
        let err = build(&source, Vintage::for_year(2018).unwrap()).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MissingRequiredValue { ref column, row: 0 } if column == "retirement_year"
        ));
    }

    #[test]
    fn year_outside_i32_range_is_invalid() {
        let source = source_2018(vec![row_2018("RE", "Electric Utility", n(75.0), n(1e12))]);
        let err = build(&source, Vintage::for_year(2018).unwrap()).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InvalidValue { ref column, ref value }
                if column == "retirement_year" && value == "1000000000000"
        ));
    }
}
