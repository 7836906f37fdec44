//! A1-notation cell ranges.
//!
//! Each view reads one fixed rectangle of the day's sheet. The ranges are
//! constants of the application, never typed in by a user, but the backend
//! still validates whatever arrives in a query string.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::grid::GRID_ROWS;

/// Block read by the EOD report; row 0 is the header row.
pub const REPORT_RANGE: &str = "G1:L26";

/// Block flattened into the WhatsApp message.
pub const EXPORT_RANGE: &str = "G28:I62";

const MAX_COLUMN_LETTERS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CellRangeError {
    #[error("cell range is empty")]
    Empty,
    #[error("{0:?} is not an A1 cell reference")]
    BadCell(String),
    #[error("{0:?} has more than one ':' separator")]
    TooManyParts(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CellRange(String);

impl CellRange {
    /// Parse and normalise (upper-case column letters) an A1 range such as
    /// `A2:E31` or a single cell such as `B7`.
    pub fn parse(range: &str) -> Result<Self, CellRangeError> {
        let range = range.trim();
        if range.is_empty() {
            return Err(CellRangeError::Empty);
        }

        let parts: Vec<&str> = range.split(':').collect();
        if parts.len() > 2 {
            return Err(CellRangeError::TooManyParts(range.to_string()));
        }

        let cells = parts
            .iter()
            .map(|cell| normalize_cell(cell).ok_or_else(|| CellRangeError::BadCell(cell.to_string())))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self(cells.join(":")))
    }

    /// The entry grid's block: five columns (ord, time, amount, payment,
    /// covers) starting below the header row, one row per grid slot.
    pub fn entry_grid() -> Self {
        Self(format!("A2:E{}", GRID_ROWS + 1))
    }

    pub fn report() -> Self {
        Self(REPORT_RANGE.to_string())
    }

    pub fn export() -> Self {
        Self(EXPORT_RANGE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn normalize_cell(cell: &str) -> Option<String> {
    let split = cell.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = cell.split_at(split);

    let letters_ok = !letters.is_empty()
        && letters.len() <= MAX_COLUMN_LETTERS
        && letters.chars().all(|c| c.is_ascii_alphabetic());
    let digits_ok = !digits.starts_with('0') && digits.chars().all(|c| c.is_ascii_digit());

    (letters_ok && digits_ok).then(|| format!("{}{}", letters.to_ascii_uppercase(), digits))
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CellRange {
    type Error = CellRangeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CellRange> for String {
    fn from(range: CellRange) -> Self {
        range.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_ranges() {
        assert_eq!(CellRange::entry_grid().as_str(), "A2:E31");
        assert_eq!(CellRange::report().as_str(), "G1:L26");
        assert_eq!(CellRange::export().as_str(), "G28:I62");
    }

    #[test]
    fn test_parse_accepts_ranges_and_single_cells() {
        assert_eq!(CellRange::parse("A2:E31").unwrap().as_str(), "A2:E31");
        assert_eq!(CellRange::parse(" g28:i62 ").unwrap().as_str(), "G28:I62");
        assert_eq!(CellRange::parse("AA10").unwrap().as_str(), "AA10");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(CellRange::parse("  "), Err(CellRangeError::Empty));
        assert!(matches!(CellRange::parse("A1:B2:C3"), Err(CellRangeError::TooManyParts(_))));
        assert!(matches!(CellRange::parse("12"), Err(CellRangeError::BadCell(_))));
        assert!(matches!(CellRange::parse("A"), Err(CellRangeError::BadCell(_))));
        assert!(matches!(CellRange::parse("A0"), Err(CellRangeError::BadCell(_))));
        assert!(matches!(CellRange::parse("ABCD1"), Err(CellRangeError::BadCell(_))));
        assert!(matches!(CellRange::parse("A1B"), Err(CellRangeError::BadCell(_))));
        assert!(matches!(CellRange::parse("A1:"), Err(CellRangeError::BadCell(_))));
    }
}
