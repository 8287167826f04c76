//! In-memory representation of one spreadsheet tab.

use std::collections::HashMap;

use crate::pipeline::PipelineError;

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Missing,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Missing, or text made only of whitespace (the sheets write `" "` for
    /// an absent number).
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Render the cell as text. Whole numbers lose their fractional part so a
    /// plant code read as `123.0` renders as `"123"`.
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            Self::Number(n) => n.to_string(),
            Self::Missing => String::new(),
        }
    }

    /// A raw text field: empty is missing, anything else stays text exactly
    /// as written. Numeric columns parse their text on coercion.
    pub fn from_field(field: &str) -> Self {
        if field.is_empty() {
            Self::Missing
        } else {
            Self::Text(field.to_string())
        }
    }
}

/// Header plus data rows of one sheet. Every row has exactly one cell per
/// header.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub sheet: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl RawTable {
    /// Build a table from every row of a sheet, top to bottom.
    ///
    /// The first `header_skip_rows` rows are discarded, the next row is the
    /// header and everything after it is data. Rows with no values at all
    /// are dropped.
    pub fn from_rows(
        sheet: &str,
        rows: Vec<Vec<Cell>>,
        header_skip_rows: usize,
    ) -> Result<Self, PipelineError> {
        let mut rows = rows.into_iter().skip(header_skip_rows);
        let header_row = rows
            .next()
            .ok_or_else(|| PipelineError::Source(format!("sheet '{sheet}' has no header row")))?;

        let headers: Vec<String> = header_row
            .iter()
            .enumerate()
            .map(|(idx, cell)| match cell {
                Cell::Missing => format!("unnamed: {idx}"),
                other => other.as_text(),
            })
            .collect();

        let width = headers.len();
        let rows = rows
            .filter(|row| row.iter().any(|c| *c != Cell::Missing))
            .map(|mut row| {
                row.resize(width, Cell::Missing);
                row
            })
            .collect();

        Ok(Self {
            sheet: sheet.to_string(),
            headers,
            rows,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn require(&self, name: &str) -> Result<usize, PipelineError> {
        self.column_index(name).ok_or_else(|| PipelineError::MissingColumn {
            column: name.to_string(),
            sheet: self.sheet.clone(),
        })
    }

    pub fn map_headers(&mut self, f: impl Fn(&str) -> String) {
        for header in &mut self.headers {
            *header = f(header);
        }
    }

    /// Apply every rename at once: each header is looked up by its current
    /// name only, so `a -> b` and `b -> c` in one batch never chain, and
    /// `a <-> b` swaps.
    pub fn rename_columns(&mut self, renames: &[(&str, &str)]) {
        let map: HashMap<&str, &str> = renames.iter().copied().collect();
        self.headers = self
            .headers
            .iter()
            .map(|h| map.get(h.as_str()).map_or_else(|| h.clone(), |new| new.to_string()))
            .collect();
    }

    /// Fill `name` with `value` on every row, adding the column if absent.
    pub fn set_column(&mut self, name: &str, value: Cell) {
        match self.column_index(name) {
            Some(idx) => {
                for row in &mut self.rows {
                    row[idx] = value.clone();
                }
            }
            None => {
                self.headers.push(name.to_string());
                for row in &mut self.rows {
                    row.push(value.clone());
                }
            }
        }
    }

    pub fn try_map_column(
        &mut self,
        name: &str,
        f: impl Fn(&Cell) -> Result<Cell, PipelineError>,
    ) -> Result<(), PipelineError> {
        let idx = self.require(name)?;
        for row in &mut self.rows {
            row[idx] = f(&row[idx])?;
        }
        Ok(())
    }
}
