use crate::{pipeline::PipelineError, table::Cell};

fn parse_number(cell: &Cell, column: &str) -> Result<Option<f64>, PipelineError> {
    if cell.is_blank() {
        return Ok(None);
    }
    match cell {
        Cell::Number(n) => Ok(Some(*n)),
        Cell::Text(s) => s.trim().parse().map(Some).map_err(|_| PipelineError::InvalidValue {
            column: column.to_string(),
            value: s.clone(),
        }),
        Cell::Missing => Ok(None),
    }
}

/// Blank becomes `None`; anything else must be numeric.
pub fn optional_f64(cell: &Cell, column: &str) -> Result<Option<f64>, PipelineError> {
    parse_number(cell, column)
}

pub fn optional_year(cell: &Cell, column: &str) -> Result<Option<i32>, PipelineError> {
    Ok(parse_number(cell, column)?.map(|n| n.round() as i32))
}

/// Round half to even and cast. Blank is a hard failure.
pub fn required_rounded(cell: &Cell, column: &str, row: usize) -> Result<i64, PipelineError> {
    parse_number(cell, column)?
        .map(|n| n.round_ties_even() as i64)
        .ok_or_else(|| PipelineError::MissingRequiredValue {
            column: column.to_string(),
            row,
        })
}

/// Convert a kilowatt cell to megawatts, keeping blanks missing.
pub fn kilowatts_to_megawatts(cell: &Cell, column: &str) -> Result<Cell, PipelineError> {
    Ok(match parse_number(cell, column)? {
        Some(kw) => Cell::Number(kw / 1000.0),
        None => Cell::Missing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_string_is_missing() {
        assert_eq!(optional_f64(&Cell::text(" "), "x").unwrap(), None);
        assert_eq!(optional_f64(&Cell::Missing, "x").unwrap(), None);
        assert_eq!(optional_f64(&Cell::Number(2030.0), "x").unwrap(), Some(2030.0));
        assert_eq!(optional_f64(&Cell::text("2030"), "x").unwrap(), Some(2030.0));
    }

    #[test]
    fn non_numeric_text_is_invalid() {
        let err = optional_f64(&Cell::text("soon"), "effective_year").unwrap_err();
        assert!(matches!(err, PipelineError::InvalidValue { column, .. } if column == "effective_year"));
    }

    #[test]
    fn required_rounding_is_half_to_even() {
        assert_eq!(required_rounded(&Cell::Number(2.5), "c", 0).unwrap(), 2);
        assert_eq!(required_rounded(&Cell::Number(1.5), "c", 0).unwrap(), 2);
        assert_eq!(required_rounded(&Cell::Number(3.7), "c", 0).unwrap(), 4);
    }

    #[test]
    fn required_blank_fails() {
        let err = required_rounded(&Cell::text(" "), "retirement_year", 7).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MissingRequiredValue { row: 7, ref column } if column == "retirement_year"
        ));
    }

    #[test]
    fn kilowatts_scale_down() {
        assert_eq!(kilowatts_to_megawatts(&Cell::Number(2500.0), "n").unwrap(), Cell::Number(2.5));
        assert_eq!(kilowatts_to_megawatts(&Cell::text(" "), "n").unwrap(), Cell::Missing);
    }
}
