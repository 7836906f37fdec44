//! End-of-day report table.
//!
//! The EOD block of the sheet is shown as-is: row 0 becomes the header, the
//! rest become body rows. Rows that open a new section of the report
//! ("Breakdown ...", "Daily revenue ...") are flagged so the view can style
//! them apart; everything else alternates shading by parity.

use serde::{Deserialize, Serialize};

use crate::table::RawTable;

const SECTION_PREFIXES: [&str; 2] = ["breakdown", "daily revenue"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowStyle {
    Section,
    Shaded,
    Plain,
}

impl RowStyle {
    pub fn css_class(self) -> &'static str {
        match self {
            RowStyle::Section => "report-row section",
            RowStyle::Shaded => "report-row shaded",
            RowStyle::Plain => "report-row",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub cells: Vec<String>,
    pub style: RowStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTable {
    pub headers: Vec<String>,
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

/// Whether a body row starts a report section, judged on its first cell.
pub fn is_section_row(row: &[String]) -> bool {
    let first = row.first().map(|c| c.trim().to_lowercase()).unwrap_or_default();
    SECTION_PREFIXES.iter().any(|prefix| first.starts_with(prefix))
}

/// Shape a fetched block into header and styled body rows.
///
/// Column count comes from the header row. Shorter body rows are padded with
/// empty cells up to it; longer rows keep their extra cells.
pub fn render(table: &RawTable) -> ReportTable {
    let Some((header, body)) = table.rows().split_first() else {
        return ReportTable::default();
    };
    let columns = header.len();

    let rows = body
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let width = columns.max(row.len());
            let cells = (0..width)
                .map(|c| row.get(c).cloned().unwrap_or_default())
                .collect();
            let style = if is_section_row(row) {
                RowStyle::Section
            } else if i % 2 == 0 {
                RowStyle::Shaded
            } else {
                RowStyle::Plain
            };
            ReportRow { cells, style }
        })
        .collect();

    ReportTable {
        headers: header.clone(),
        rows,
    }
}
