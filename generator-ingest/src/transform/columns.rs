use crate::table::RawTable;

/// How raw header labels are folded into canonical column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    /// Lowercase, spaces and slashes to underscores, `?` removed, unit
    /// suffixes such as `_(mw)` cut off.
    Snake,
    /// Lowercase only. The 2010 existing-generator sheet already uses
    /// snake-cased labels.
    LowercaseOnly,
}

impl HeaderStyle {
    pub fn for_year(year: u16) -> Self {
        if year == 2010 {
            Self::LowercaseOnly
        } else {
            Self::Snake
        }
    }
}

/// Renames applied to the operating and proposed sheets. `sector` holds a
/// numeric code and moves aside so the textual `sector_name` can take its
/// place; this only works applied as one batch.
pub const STANDARD_RENAMES: [(&str, &str); 3] = [
    ("nameplate", "nameplate_capacity"),
    ("sector_name", "sector"),
    ("sector", "sector_code"),
];

/// Renames applied to the retired sheet.
pub const SECTOR_RENAMES: [(&str, &str); 2] = [("sector_name", "sector"), ("sector", "sector_code")];

pub fn normalize_label(raw_label: &str, style: HeaderStyle) -> String {
    let lowered = raw_label.to_lowercase();
    match style {
        HeaderStyle::LowercaseOnly => lowered,
        HeaderStyle::Snake => {
            let snake = lowered.replace(' ', "_").replace('?', "").replace('/', "_");
            match snake.find("_(") {
                Some(cut) => snake[..cut].to_string(),
                None => snake,
            }
        }
    }
}

/// Normalize a raw label with the punctuation rules for `year`.
pub fn normalize(raw_label: &str, year: u16) -> String {
    normalize_label(raw_label, HeaderStyle::for_year(year))
}

/// Canonical name for a raw label: [`normalize`] followed by
/// [`STANDARD_RENAMES`].
pub fn canonical_name(raw_label: &str, year: u16) -> String {
    let normalized = normalize(raw_label, year);
    STANDARD_RENAMES
        .iter()
        .find(|(from, _)| *from == normalized)
        .map_or(normalized, |(_, to)| to.to_string())
}

/// Normalize every header of `table`, then apply `renames` as one batch.
pub fn normalize_headers(table: &mut RawTable, style: HeaderStyle, renames: &[(&str, &str)]) {
    table.map_headers(|h| normalize_label(h, style));
    table.rename_columns(renames);
}
