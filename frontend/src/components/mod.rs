pub mod bottom_nav;
pub mod daily_sales;
pub mod entry_row;
pub mod eod_report;
pub mod home;
pub mod nav_link;
pub mod not_found;
pub mod toaster;
pub mod whatsapp_export;
