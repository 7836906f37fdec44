pub mod use_entry_grid;
pub mod use_notifications;
pub mod use_sheet_range;
