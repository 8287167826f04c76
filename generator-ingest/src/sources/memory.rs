use std::collections::HashMap;

use crate::{
    pipeline::{PipelineError, TabularSource},
    table::{Cell, RawTable},
};

/// Sheets held in memory, keyed by year and sheet name.
///
/// Rows are stored as they would appear in the workbook, title rows
/// included, so the header skip is applied on open exactly as for a real
/// file.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    sheets: HashMap<(u16, String), Vec<Vec<Cell>>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, year: u16, sheet_name: &str, rows: Vec<Vec<Cell>>) -> Self {
        self.insert(year, sheet_name, rows);
        self
    }

    pub fn insert(&mut self, year: u16, sheet_name: &str, rows: Vec<Vec<Cell>>) {
        self.sheets.insert((year, sheet_name.to_string()), rows);
    }
}

impl TabularSource for InMemorySource {
    fn open_sheet(
        &self,
        year: u16,
        sheet_name: &str,
        header_skip_rows: usize,
    ) -> Result<RawTable, PipelineError> {
        let rows = self
            .sheets
            .get(&(year, sheet_name.to_string()))
            .ok_or_else(|| PipelineError::Source(format!("no sheet '{sheet_name}' for {year}")))?;
        RawTable::from_rows(sheet_name, rows.clone(), header_skip_rows)
    }
}
