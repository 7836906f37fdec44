use std::sync::Arc;

use shared::{CellRange, ClientConfig, RangeResponse, SalesRecord, SaveRowsResponse, SheetId};
use tracing::{info, warn};

use crate::config::Config;
use crate::gateway::{GatewayError, SheetGateway};

/// Sheet reads and sales saves, on top of whichever gateway is plugged in.
#[derive(Clone)]
pub struct SalesService {
    gateway: Arc<dyn SheetGateway>,
    config: Arc<Config>,
}

impl SalesService {
    pub fn new(gateway: Arc<dyn SheetGateway>, config: Arc<Config>) -> Self {
        Self { gateway, config }
    }

    /// Settings the browser app needs.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            default_sheet: self.config.default_sheet.to_string(),
        }
    }

    /// Fetch one block of a day's sheet.
    pub async fn load_range(&self, sheet: &SheetId, range: &CellRange) -> Result<RangeResponse, GatewayError> {
        info!("Loading range {} from sheet {}", range, sheet);

        match self.gateway.fetch_range(sheet, range).await {
            Ok(values) => {
                info!("Loaded {} rows from sheet {}", values.len(), sheet);
                Ok(RangeResponse {
                    sheet: sheet.to_string(),
                    range: range.to_string(),
                    values,
                })
            }
            Err(e) => {
                warn!("Failed to load range {} from sheet {}: {}", range, sheet, e);
                Err(e)
            }
        }
    }

    /// Send the filled rows of a day to its sheet. An empty batch is answered
    /// locally and never reaches the gateway.
    pub async fn save_rows(&self, sheet: &SheetId, rows: Vec<SalesRecord>) -> Result<SaveRowsResponse, GatewayError> {
        if rows.is_empty() {
            info!("Nothing to save for sheet {}", sheet);
            return Ok(SaveRowsResponse { saved: 0 });
        }

        info!("Saving {} rows to sheet {}", rows.len(), sheet);
        self.gateway.submit_rows(&rows, sheet).await?;
        Ok(SaveRowsResponse { saved: rows.len() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_config, FakeGateway};
    use shared::raw_table;

    fn service(gateway: Arc<FakeGateway>) -> SalesService {
        SalesService::new(gateway, Arc::new(test_config()))
    }

    fn sheet() -> SheetId {
        SheetId::parse("051025").unwrap()
    }

    #[tokio::test]
    async fn test_load_range_wraps_values() {
        let gateway = Arc::new(FakeGateway::new().with_sheet("051025", raw_table![["a", "b"]]));
        let response = service(gateway)
            .load_range(&sheet(), &CellRange::report())
            .await
            .unwrap();
        assert_eq!(response.sheet, "051025");
        assert_eq!(response.range, "G1:L26");
        assert_eq!(response.values, raw_table![["a", "b"]]);
    }

    #[tokio::test]
    async fn test_load_range_passes_errors_through() {
        let gateway = Arc::new(FakeGateway::new());
        let err = service(gateway)
            .load_range(&sheet(), &CellRange::report())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::SheetNotFound { .. }));
    }

    #[tokio::test]
    async fn test_empty_save_skips_gateway() {
        let gateway = Arc::new(FakeGateway::new().failing_with(GatewayError::Configuration));
        let response = service(gateway.clone()).save_rows(&sheet(), vec![]).await.unwrap();
        assert_eq!(response.saved, 0);
        assert!(gateway.submissions().is_empty());
    }

    #[tokio::test]
    async fn test_save_forwards_rows_once() {
        let gateway = Arc::new(FakeGateway::new());
        let rows = vec![SalesRecord { ord: "1".into(), amount: "9".into(), ..Default::default() }];

        let response = service(gateway.clone()).save_rows(&sheet(), rows.clone()).await.unwrap();
        assert_eq!(response.saved, 1);
        assert_eq!(gateway.submissions(), vec![("051025".to_string(), rows)]);
    }

    #[tokio::test]
    async fn test_client_config_exposes_default_sheet() {
        let config = service(Arc::new(FakeGateway::new())).client_config();
        assert_eq!(config.default_sheet, "051025");
    }
}
