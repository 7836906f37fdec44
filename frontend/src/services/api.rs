use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{
    ApiError, CellRange, ClientConfig, ErrorCode, RangeResponse, SalesRecord, SaveRowsRequest,
    SaveRowsResponse, SheetId,
};

/// API client for communicating with the backend server
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Client for the server that served the page
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Settings the server hands to the browser (default sheet)
    pub async fn get_config(&self) -> Result<ClientConfig, ApiError> {
        let url = format!("{}/api/config", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => read_json(response).await,
            Err(e) => Err(network_error(e)),
        }
    }

    /// Read a block of cells from one day's sheet
    pub async fn fetch_range(
        &self,
        sheet: &SheetId,
        range: &CellRange,
    ) -> Result<RangeResponse, ApiError> {
        let url = format!(
            "{}/api/sheets/{}/range?range={}",
            self.base_url, sheet, range
        );

        match Request::get(&url).send().await {
            Ok(response) => read_json(response).await,
            Err(e) => Err(network_error(e)),
        }
    }

    /// Append the given rows to a day's sheet
    pub async fn save_rows(
        &self,
        sheet: &SheetId,
        rows: Vec<SalesRecord>,
    ) -> Result<SaveRowsResponse, ApiError> {
        let url = format!("{}/api/sheets/{}/rows", self.base_url, sheet);
        let request = SaveRowsRequest { rows };

        match Request::post(&url)
            .json(&request)
            .map_err(|e| {
                ApiError::new(
                    ErrorCode::BadRequest,
                    format!("Failed to serialize request: {}", e),
                )
            })?
            .send()
            .await
        {
            Ok(response) => read_json(response).await,
            Err(e) => Err(network_error(e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        return response.json::<T>().await.map_err(|e| {
            ApiError::new(ErrorCode::Remote, format!("Failed to parse response: {}", e))
        });
    }

    let status = response.status();
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(error_from_body(status, &error_text))
}

/// Decode a failed reply. Bodies that are not an `ApiError` come from
/// proxies or the static file server and are classified by status alone.
fn error_from_body(status: u16, body: &str) -> ApiError {
    serde_json::from_str::<ApiError>(body).unwrap_or_else(|_| {
        let code = if status == 404 {
            ErrorCode::SheetNotFound
        } else {
            ErrorCode::Remote
        };
        ApiError::new(code, format!("{} {}", status, body.trim()))
    })
}

fn network_error(e: gloo::net::Error) -> ApiError {
    ApiError::new(ErrorCode::Network, format!("Network error: {}", e))
}
