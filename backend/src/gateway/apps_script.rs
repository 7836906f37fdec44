//! HTTP client for the spreadsheet web-app endpoint.
//!
//! Read: `GET {base}?sheet=<id>&range=<A1>` answering
//! `{ ok, values?, sheet?, range?, error? }`.
//! Write: `POST {base}` with a URL-encoded form holding `rows` (a JSON array
//! of sales records) and `sheet`. A plain form post keeps the endpoint from
//! demanding a CORS preflight when it is called from a browser.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use shared::{CellRange, RawTable, SalesRecord, SheetId};
use tracing::{debug, info, warn};

use super::{classify_read_failure, GatewayError, SheetGateway};

/// Default timeout for gateway requests (30 seconds).
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct ReadReply {
    ok: bool,
    #[serde(default)]
    values: Option<RawTable>,
    #[serde(default)]
    sheet: Option<String>,
    #[serde(default)]
    range: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Clone)]
pub struct AppsScriptGateway {
    client: Client,
    base_url: Option<Url>,
}

impl AppsScriptGateway {
    pub fn new(base_url: Option<Url>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self { client, base_url })
    }

    fn base_url(&self) -> Result<&Url, GatewayError> {
        self.base_url.as_ref().ok_or(GatewayError::Configuration)
    }
}

/// Convert a `reqwest::Error` into a message fit for a toast.
fn friendly_error(url: &Url, err: &reqwest::Error) -> GatewayError {
    let host = url.host_str().unwrap_or("the spreadsheet endpoint");
    let message = if err.is_connect() {
        format!("Cannot reach {host}")
    } else if err.is_timeout() {
        format!("Connection to {host} timed out")
    } else {
        format!("Network error talking to {host}: {err}")
    };
    GatewayError::Network(message)
}

#[async_trait]
impl SheetGateway for AppsScriptGateway {
    async fn fetch_range(&self, sheet: &SheetId, range: &CellRange) -> Result<RawTable, GatewayError> {
        let base = self.base_url()?;
        let started = Instant::now();

        let response = self
            .client
            .get(base.clone())
            .query(&[("sheet", sheet.as_str()), ("range", range.as_str())])
            .send()
            .await
            .map_err(|e| friendly_error(base, &e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| friendly_error(base, &e))?;

        if !status.is_success() {
            warn!(sheet = %sheet, range = %range, status = status.as_u16(), "range read rejected");
            return Err(classify_read_failure(sheet, Some(status.as_u16()), &body));
        }

        let reply: ReadReply =
            serde_json::from_str(&body).map_err(|e| GatewayError::Decode(e.to_string()))?;

        if !reply.ok {
            let message = reply.error.unwrap_or_default();
            warn!(sheet = %sheet, range = %range, error = %message, "range read failed");
            return Err(classify_read_failure(sheet, None, &message));
        }

        let values = reply.values.unwrap_or_default();
        debug!(
            sheet = %sheet,
            range = %range,
            reply_sheet = ?reply.sheet,
            reply_range = ?reply.range,
            rows = values.len(),
            latency_ms = started.elapsed().as_millis() as u64,
            "range read"
        );
        Ok(values)
    }

    async fn submit_rows(&self, rows: &[SalesRecord], sheet: &SheetId) -> Result<(), GatewayError> {
        let base = self.base_url()?;
        let rows_json =
            serde_json::to_string(rows).map_err(|e| GatewayError::Decode(e.to_string()))?;

        let response = self
            .client
            .post(base.clone())
            .form(&[("rows", rows_json.as_str()), ("sheet", sheet.as_str())])
            .send()
            .await
            .map_err(|e| friendly_error(base, &e))?;

        let status = response.status();
        if status.is_success() {
            info!(sheet = %sheet, rows = rows.len(), "rows submitted");
        } else {
            // The endpoint has no acknowledgement contract; record what it said.
            let body = response.text().await.unwrap_or_default();
            warn!(sheet = %sheet, status = status.as_u16(), body = %body, "rows submitted, endpoint replied with an error status");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Form, Query, State},
        http::StatusCode,
        response::IntoResponse,
        routing::get,
        Json, Router,
    };
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Endpoint {
        posted: Arc<Mutex<Vec<HashMap<String, String>>>>,
    }

    async fn read(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
        match params.get("sheet").map(String::as_str) {
            Some("051025") => Json(json!({
                "ok": true,
                "sheet": "051025",
                "range": params.get("range"),
                "values": [["1", "HH", 12.5, "Cash", 2], ["2", "D", "", null, ""]],
            }))
            .into_response(),
            Some("061025") => Json(json!({ "ok": true, "sheet": "061025" })).into_response(),
            Some("071025") => {
                Json(json!({ "ok": false, "error": "Sheet not found: 071025" })).into_response()
            }
            Some("081025") => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
            Some("101025") => {
                Json(json!({ "ok": false, "error": "Range G1:L26 invalid" })).into_response()
            }
            _ => (StatusCode::NOT_FOUND, "no such sheet").into_response(),
        }
    }

    async fn write(
        State(endpoint): State<Endpoint>,
        Form(form): Form<HashMap<String, String>>,
    ) -> impl IntoResponse {
        endpoint.posted.lock().unwrap().push(form);
        Json(json!({ "ok": true }))
    }

    async fn spawn_endpoint() -> (Url, Endpoint) {
        let endpoint = Endpoint::default();
        let app = Router::new()
            .route("/exec", get(read).post(write))
            .with_state(endpoint.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        let url = Url::parse(&format!("http://{}/exec", addr)).unwrap();
        (url, endpoint)
    }

    fn sheet(id: &str) -> SheetId {
        SheetId::parse(id).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_range_stringifies_cells() {
        let (url, _) = spawn_endpoint().await;
        let gateway = AppsScriptGateway::new(Some(url)).unwrap();

        let table = gateway
            .fetch_range(&sheet("051025"), &CellRange::entry_grid())
            .await
            .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0], vec!["1", "HH", "12.5", "Cash", "2"]);
        assert_eq!(table.rows()[1][3], "");
    }

    #[tokio::test]
    async fn test_fetch_range_without_values_is_empty() {
        let (url, _) = spawn_endpoint().await;
        let gateway = AppsScriptGateway::new(Some(url)).unwrap();

        let table = gateway
            .fetch_range(&sheet("061025"), &CellRange::report())
            .await
            .unwrap();
        assert!(table.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_range_classifies_failures() {
        let (url, _) = spawn_endpoint().await;
        let gateway = AppsScriptGateway::new(Some(url)).unwrap();
        let range = CellRange::report();

        let err = gateway.fetch_range(&sheet("091025"), &range).await.unwrap_err();
        assert!(matches!(err, GatewayError::SheetNotFound { status: Some(404), .. }));

        let err = gateway.fetch_range(&sheet("071025"), &range).await.unwrap_err();
        assert!(matches!(err, GatewayError::SheetNotFound { status: None, .. }));

        let err = gateway.fetch_range(&sheet("081025"), &range).await.unwrap_err();
        assert_eq!(err, GatewayError::Remote { status: Some(500), body: "boom".into() });

        let err = gateway.fetch_range(&sheet("101025"), &range).await.unwrap_err();
        assert_eq!(err, GatewayError::Remote { status: None, body: "Range G1:L26 invalid".into() });
    }

    #[tokio::test]
    async fn test_submit_rows_posts_form_fields() {
        let (url, endpoint) = spawn_endpoint().await;
        let gateway = AppsScriptGateway::new(Some(url)).unwrap();
        let rows = vec![SalesRecord {
            ord: "1".into(),
            time: "LN".into(),
            amount: "30".into(),
            payment: "Visa".into(),
            covers: "2".into(),
        }];

        gateway.submit_rows(&rows, &sheet("051025")).await.unwrap();

        let posted = endpoint.posted.lock().unwrap();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0]["sheet"], "051025");
        let sent: Vec<SalesRecord> = serde_json::from_str(&posted[0]["rows"]).unwrap();
        assert_eq!(sent, rows);
    }

    #[tokio::test]
    async fn test_missing_url_fails_before_any_request() {
        let gateway = AppsScriptGateway::new(None).unwrap();
        let err = gateway
            .fetch_range(&sheet("051025"), &CellRange::report())
            .await
            .unwrap_err();
        assert_eq!(err, GatewayError::Configuration);

        let err = gateway.submit_rows(&[], &sheet("051025")).await.unwrap_err();
        assert_eq!(err, GatewayError::Configuration);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        // bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = Url::parse(&format!("http://{}/exec", addr)).unwrap();
        let gateway = AppsScriptGateway::new(Some(url)).unwrap();
        let err = gateway
            .fetch_range(&sheet("051025"), &CellRange::report())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Network(_)));
    }
}
