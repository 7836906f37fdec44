//! Shared fixtures for backend tests.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use shared::sheet::default_sheet;
use shared::{CellRange, RawTable, SalesRecord, SheetId};

use crate::config::Config;
use crate::gateway::{GatewayError, SheetGateway};

/// In-memory stand-in for the spreadsheet endpoint. Sheets not registered
/// with [`FakeGateway::with_sheet`] are reported missing.
#[derive(Default)]
pub struct FakeGateway {
    sheets: HashMap<String, RawTable>,
    failure: Option<GatewayError>,
    submissions: Mutex<Vec<(String, Vec<SalesRecord>)>>,
    reads: Mutex<Vec<(String, String)>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, sheet: &str, table: RawTable) -> Self {
        self.sheets.insert(sheet.to_string(), table);
        self
    }

    /// Make every call fail with `error`.
    pub fn failing_with(mut self, error: GatewayError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn submissions(&self) -> Vec<(String, Vec<SalesRecord>)> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn reads(&self) -> Vec<(String, String)> {
        self.reads.lock().unwrap().clone()
    }
}

#[async_trait]
impl SheetGateway for FakeGateway {
    async fn fetch_range(&self, sheet: &SheetId, range: &CellRange) -> Result<RawTable, GatewayError> {
        self.reads
            .lock()
            .unwrap()
            .push((sheet.to_string(), range.to_string()));
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.sheets
            .get(sheet.as_str())
            .cloned()
            .ok_or_else(|| GatewayError::SheetNotFound {
                sheet: sheet.to_string(),
                status: Some(404),
            })
    }

    async fn submit_rows(&self, rows: &[SalesRecord], sheet: &SheetId) -> Result<(), GatewayError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.submissions
            .lock()
            .unwrap()
            .push((sheet.to_string(), rows.to_vec()));
        Ok(())
    }
}

pub fn test_config() -> Config {
    Config {
        gateway_url: None,
        default_sheet: default_sheet(None),
        bind_addr: ([127, 0, 0, 1], 0).into(),
        static_dir: PathBuf::from("does-not-exist"),
        cors_origin: "http://localhost:8080".to_string(),
    }
}
