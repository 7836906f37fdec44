//! # Remote Data Gateway
//!
//! The spreadsheet lives behind a single web-app endpoint that understands
//! two calls: read a rectangular range of a named sheet, and write a batch
//! of sales rows to a named sheet. [`SheetGateway`] is that contract; the
//! domain layer only ever talks to the trait so tests can swap in a fake.
//!
//! Calls are made once. There are no retries: a failure goes straight back
//! to the caller.

pub mod apps_script;

use async_trait::async_trait;
use shared::{ApiError, CellRange, ErrorCode, RawTable, SalesRecord, SheetId};

pub use apps_script::AppsScriptGateway;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("spreadsheet endpoint URL is not configured; set TILLBOOK_GATEWAY_URL")]
    Configuration,
    #[error("{0}")]
    Network(String),
    /// `status` is absent when the endpoint answered 2xx with `ok: false`.
    #[error("failed to fetch range: {}", remote_detail(.status, .body))]
    Remote { status: Option<u16>, body: String },
    #[error("sheet {sheet} not found")]
    SheetNotFound { sheet: String, status: Option<u16> },
    #[error("unreadable reply from spreadsheet endpoint: {0}")]
    Decode(String),
}

impl GatewayError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GatewayError::Configuration => ErrorCode::Configuration,
            GatewayError::Network(_) => ErrorCode::Network,
            GatewayError::Remote { .. } | GatewayError::Decode(_) => ErrorCode::Remote,
            GatewayError::SheetNotFound { .. } => ErrorCode::SheetNotFound,
        }
    }

    pub fn to_api_error(&self) -> ApiError {
        let error = ApiError::new(self.code(), self.to_string());
        match self {
            GatewayError::Remote { status: Some(status), .. } => error.with_upstream_status(*status),
            GatewayError::SheetNotFound { status: Some(status), .. } => {
                error.with_upstream_status(*status)
            }
            _ => error,
        }
    }
}

/// Decide what a failed read means. The endpoint signals a missing tab
/// either with a 404 or with an error text naming it; that judgement is made
/// here, once, and travels on as [`ErrorCode::SheetNotFound`].
pub fn classify_read_failure(sheet: &SheetId, status: Option<u16>, message: &str) -> GatewayError {
    let names_missing_sheet = message.to_lowercase().contains("sheet not found");
    if status == Some(404) || names_missing_sheet {
        return GatewayError::SheetNotFound {
            sheet: sheet.to_string(),
            status,
        };
    }
    GatewayError::Remote {
        status,
        body: message.to_string(),
    }
}

fn remote_detail(status: &Option<u16>, body: &str) -> String {
    match status {
        Some(status) => format!("{} {}", status, body),
        None => body.to_string(),
    }
}

#[async_trait]
pub trait SheetGateway: Send + Sync {
    /// Read `range` from `sheet`. A blank range is an empty table, not an
    /// error.
    async fn fetch_range(&self, sheet: &SheetId, range: &CellRange) -> Result<RawTable, GatewayError>;

    /// Send `rows` to `sheet` in one request. Only transport failures are
    /// reported; the endpoint gives no structured acknowledgement.
    async fn submit_rows(&self, rows: &[SalesRecord], sheet: &SheetId) -> Result<(), GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> SheetId {
        SheetId::parse("051025").unwrap()
    }

    #[test]
    fn test_404_is_missing_sheet() {
        let err = classify_read_failure(&sheet(), Some(404), "Not Found");
        assert_eq!(
            err,
            GatewayError::SheetNotFound { sheet: "051025".into(), status: Some(404) }
        );
        assert_eq!(err.to_api_error().upstream_status, Some(404));
    }

    #[test]
    fn test_error_text_naming_missing_sheet() {
        let err = classify_read_failure(&sheet(), None, "Error: Sheet not found: 051025");
        assert_eq!(err.code(), ErrorCode::SheetNotFound);
    }

    #[test]
    fn test_other_failures_stay_remote() {
        let err = classify_read_failure(&sheet(), Some(500), "Internal error");
        assert_eq!(err, GatewayError::Remote { status: Some(500), body: "Internal error".into() });
        assert_eq!(err.to_string(), "failed to fetch range: 500 Internal error");

        let api = err.to_api_error();
        assert_eq!(api.code, ErrorCode::Remote);
        assert_eq!(api.upstream_status, Some(500));
    }

    #[test]
    fn test_rejected_read_carries_no_status() {
        let err = classify_read_failure(&sheet(), None, "Range invalid");
        assert_eq!(err, GatewayError::Remote { status: None, body: "Range invalid".into() });
        assert_eq!(err.to_string(), "failed to fetch range: Range invalid");
        assert_eq!(err.to_api_error().upstream_status, None);
    }

    #[test]
    fn test_configuration_error_has_no_upstream_status() {
        let api = GatewayError::Configuration.to_api_error();
        assert_eq!(api.code, ErrorCode::Configuration);
        assert_eq!(api.upstream_status, None);
    }
}
