//! Domain logic and wire types for the daily sales tool.
//!
//! Everything here is pure: no I/O, no clock reads. The backend and the
//! browser app both build on it, and it carries the tests for the rules that
//! matter (sheet naming, grid reconciliation, report and message shaping).

pub mod api;
pub mod export;
pub mod generation;
pub mod grid;
pub mod range;
pub mod report;
pub mod route;
pub mod sales;
pub mod sheet;
pub mod table;

pub use api::{
    ApiError, ClientConfig, ErrorCode, LogRequest, LogResponse, RangeResponse, SaveRowsRequest,
    SaveRowsResponse, NOTHING_TO_SAVE_NOTICE, SAVED_NOTICE, SHEET_NOT_FOUND_NOTICE,
};
pub use export::to_text;
pub use generation::{LoadGeneration, LoadTicket};
pub use grid::{EntryGrid, SavePlan, GRID_ROWS};
pub use range::{CellRange, CellRangeError};
pub use report::{ReportRow, ReportTable, RowStyle};
pub use route::Route;
pub use sales::{PaymentType, SalesField, SalesRecord, SalesRow, TimeBlock};
pub use sheet::{SheetId, SheetIdError};
pub use table::RawTable;
