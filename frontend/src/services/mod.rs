pub mod api;
pub mod clipboard;
pub mod logging;
pub mod router;
