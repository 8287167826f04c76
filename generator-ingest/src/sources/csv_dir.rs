use std::{fs::File, path::PathBuf};

use crate::{
    pipeline::{PipelineError, TabularSource},
    table::{Cell, RawTable},
};

/// Sheets exported to CSV, one file per tab:
/// `<root>/<year>/<sheet name>.csv`.
///
/// Empty fields are missing and everything else is kept as text exactly as
/// written, so identifiers like `01` survive. Numeric columns are parsed
/// when the pipelines coerce them.
pub struct CsvDirSource {
    root: PathBuf,
}

impl CsvDirSource {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    fn sheet_path(&self, year: u16, sheet_name: &str) -> PathBuf {
        self.root.join(year.to_string()).join(format!("{sheet_name}.csv"))
    }
}

impl TabularSource for CsvDirSource {
    fn open_sheet(
        &self,
        year: u16,
        sheet_name: &str,
        header_skip_rows: usize,
    ) -> Result<RawTable, PipelineError> {
        let path = self.sheet_path(year, sheet_name);
        let file = File::open(&path).map_err(|e| {
            PipelineError::Source(format!("failed to open CSV sheet {}: {e}", path.display()))
        })?;
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result
                .map_err(|e| PipelineError::Source(format!("failed to read CSV record: {e}")))?;
            rows.push(record.iter().map(Cell::from_field).collect());
        }

        tracing::debug!(path = %path.display(), rows = rows.len(), "read CSV sheet");
        RawTable::from_rows(sheet_name, rows, header_skip_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn reads_sheet_from_year_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("2018")).unwrap();
        fs::write(
            dir.path().join("2018").join("Proposed.csv"),
            "Form EIA-860,,\nPlant Code,Status,Effective Year\n7,TS, \n8,V,2021\n",
        )
        .unwrap();

        let source = CsvDirSource::new(dir.path());
        let table = source.open_sheet(2018, "Proposed", 1).unwrap();
        assert_eq!(table.headers, vec!["Plant Code", "Status", "Effective Year"]);
        assert_eq!(
            table.rows,
            vec![
                vec![Cell::text("7"), Cell::text("TS"), Cell::text(" ")],
                vec![Cell::text("8"), Cell::text("V"), Cell::text("2021")],
            ]
        );
    }

    #[test]
    fn numeric_looking_generator_ids_keep_their_spelling() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("2018")).unwrap();
        fs::write(
            dir.path().join("2018").join("Operable.csv"),
            "Form EIA-860 Data - Schedule 3,,,,,,,,,,,,\n\
             Utility Name,Plant Code,Plant Name,State,County,Generator ID,Sector Name,Sector,\
             Nameplate Capacity (MW),Status,Operating Year,Planned Retirement Year,Energy Source 1\n\
             Util,5,Plant,TX,Harris,01,Electric Utility,1,100.5,OP,1995, ,NG\n\
             Util,5,Plant,TX,Harris,1,Electric Utility,1,50,OP,2001, ,NG\n\
             Util,6,Plant,TX,Harris,1E2,IPP,2,20,OP,2010,2040,SUN\n",
        )
        .unwrap();

        let source = CsvDirSource::new(dir.path());
        let table = source.open_sheet(2018, "Operable", 1).unwrap();
        let generator_ids: Vec<_> = table.rows.iter().map(|row| row[5].clone()).collect();
        assert_eq!(
            generator_ids,
            vec![Cell::text("01"), Cell::text("1"), Cell::text("1E2")]
        );

        let vintage = crate::vintage::Vintage::for_year(2018).unwrap();
        let out = crate::pipeline::operating::build(&source, vintage).unwrap();
        let keys: Vec<_> = out.iter().map(|g| g.generator_uuid.as_str()).collect();
        assert_eq!(keys, vec!["5_01", "5_1", "6_1E2"]);
        assert_eq!(out[0].nameplate_capacity, Some(100.5));
        assert_eq!(out[1].operating_year, Some(2001));
        assert_eq!(out[2].planned_retirement_year, Some(2040.0));
    }

    #[test]
    fn missing_file_is_a_source_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = CsvDirSource::new(dir.path());
        assert!(matches!(
            source.open_sheet(2010, "Exist", 0),
            Err(PipelineError::Source(_))
        ));
    }
}
