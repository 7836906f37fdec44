//! Request and response types shared by the backend REST layer and the
//! browser client.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::sales::SalesRecord;
use crate::table::RawTable;

/// Settings the browser needs from the server's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub default_sheet: String,
}

/// Cells fetched for `range` on `sheet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeResponse {
    pub sheet: String,
    pub range: String,
    #[serde(default)]
    pub values: RawTable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRowsRequest {
    pub rows: Vec<SalesRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRowsResponse {
    /// Number of rows handed to the spreadsheet endpoint; 0 means nothing
    /// was sent.
    pub saved: usize,
}

/// Machine-readable failure category, so callers never have to sniff
/// message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The gateway URL is not configured.
    Configuration,
    /// The spreadsheet endpoint could not be reached.
    Network,
    /// The spreadsheet endpoint answered with a failure.
    Remote,
    /// The requested day has no sheet.
    SheetNotFound,
    InvalidSheet,
    InvalidRange,
    BadRequest,
}

impl ErrorCode {
    pub fn http_status(self) -> u16 {
        match self {
            ErrorCode::SheetNotFound => 404,
            ErrorCode::InvalidSheet | ErrorCode::InvalidRange | ErrorCode::BadRequest => 400,
            ErrorCode::Network | ErrorCode::Remote => 502,
            ErrorCode::Configuration => 503,
        }
    }
}

/// Error body returned by every failing `/api` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
    /// Status reported by the spreadsheet endpoint, when it answered at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            upstream_status: None,
        }
    }

    pub fn with_upstream_status(mut self, status: u16) -> Self {
        self.upstream_status = Some(status);
        self
    }

    /// Text for the toast shown when a sheet fails to load.
    pub fn load_notice(&self) -> String {
        match self.code {
            ErrorCode::SheetNotFound => SHEET_NOT_FOUND_NOTICE.to_string(),
            _ if self.message.is_empty() => "Failed to load sheet".to_string(),
            _ => self.message.clone(),
        }
    }

    /// Text for the toast shown when saving fails.
    pub fn save_notice(&self) -> String {
        if self.message.is_empty() {
            "Failed to save report".to_string()
        } else {
            self.message.clone()
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

pub const SHEET_NOT_FOUND_NOTICE: &str = "Sheet not found. Please select a different date.";
pub const SAVED_NOTICE: &str = "Report saved to Google Sheet.";
pub const NOTHING_TO_SAVE_NOTICE: &str = "No rows to save.";

/// A log line relayed from the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRequest {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_wire_names() {
        let err = ApiError::new(ErrorCode::SheetNotFound, "missing").with_upstream_status(404);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"code": "sheet_not_found", "message": "missing", "upstream_status": 404})
        );

        let back: ApiError = serde_json::from_str(r#"{"code":"network","message":"down"}"#).unwrap();
        assert_eq!(back.code, ErrorCode::Network);
        assert_eq!(back.upstream_status, None);
    }

    #[test]
    fn test_load_notice_uses_code_not_text() {
        let missing = ApiError::new(ErrorCode::SheetNotFound, "anything at all");
        assert_eq!(missing.load_notice(), SHEET_NOT_FOUND_NOTICE);

        // a remote message mentioning 404 is not treated as a missing sheet
        let remote = ApiError::new(ErrorCode::Remote, "upstream said 404 somewhere");
        assert_eq!(remote.load_notice(), "upstream said 404 somewhere");

        assert_eq!(ApiError::new(ErrorCode::Network, "").load_notice(), "Failed to load sheet");
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(ErrorCode::SheetNotFound.http_status(), 404);
        assert_eq!(ErrorCode::InvalidRange.http_status(), 400);
        assert_eq!(ErrorCode::Remote.http_status(), 502);
        assert_eq!(ErrorCode::Configuration.http_status(), 503);
    }

    #[test]
    fn test_range_response_tolerates_missing_values() {
        let res: RangeResponse =
            serde_json::from_str(r#"{"sheet":"051025","range":"G1:L26"}"#).unwrap();
        assert!(res.values.is_empty());
    }
}
