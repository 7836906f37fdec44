//! Entry grid controller.
//!
//! The daily sales page edits a fixed block of [`GRID_ROWS`] rows. Row index
//! is display order and also the fallback order number. The grid is never
//! resized: loading overwrites every slot and clearing empties every slot.

use crate::sales::{SalesField, SalesRecord, SalesRow};
use crate::table::RawTable;

pub const GRID_ROWS: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryGrid {
    rows: Vec<SalesRow>,
}

/// What pressing "Save" should do with the current grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavePlan {
    /// No row holds any value; the gateway must not be called.
    NothingToSave,
    Submit(Vec<SalesRecord>),
}

impl EntryGrid {
    pub fn new() -> Self {
        Self {
            rows: vec![SalesRow::default(); GRID_ROWS],
        }
    }

    /// Build a grid from the cells fetched for the grid's range. Total: extra
    /// table rows are ignored, missing rows become empty rows.
    pub fn from_table(table: &RawTable) -> Self {
        let rows = (0..GRID_ROWS)
            .map(|i| table.row(i).map(SalesRow::from_cells).unwrap_or_default())
            .collect();
        Self { rows }
    }

    /// Replace the whole grid with the contents of `table`.
    pub fn load(&mut self, table: &RawTable) {
        *self = Self::from_table(table);
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn rows(&self) -> &[SalesRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&SalesRow> {
        self.rows.get(index)
    }

    /// Edit one cell. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, field: SalesField, value: &str) {
        if let Some(row) = self.rows.get_mut(index) {
            row.set(field, value);
        }
    }

    /// Highest index holding a filled row.
    pub fn last_filled_index(&self) -> Option<usize> {
        self.rows.iter().rposition(SalesRow::is_filled)
    }

    /// Rows to show: every row up to the last filled one plus one empty row
    /// for the next entry, at least one, at most the whole grid.
    pub fn visible_count(&self) -> usize {
        let wanted = self.last_filled_index().map_or(1, |i| i + 2);
        wanted.clamp(1, GRID_ROWS)
    }

    /// Position of the Clear/Save action row: directly after the last filled
    /// row, or at the top of an empty grid.
    pub fn action_row_index(&self) -> usize {
        self.last_filled_index().map_or(0, |i| i + 1)
    }

    /// Filled rows in grid order, each with its order number defaulted to
    /// its 1-based position. Empty rows are dropped entirely.
    pub fn rows_to_submit(&self) -> Vec<SalesRecord> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.is_filled())
            .map(|(i, row)| row.to_record(i))
            .collect()
    }

    pub fn save_plan(&self) -> SavePlan {
        let records = self.rows_to_submit();
        if records.is_empty() {
            SavePlan::NothingToSave
        } else {
            SavePlan::Submit(records)
        }
    }
}

impl Default for EntryGrid {
    fn default() -> Self {
        Self::new()
    }
}
