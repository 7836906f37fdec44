//! # REST API Interface Layer
//!
//! HTTP endpoints used by the browser app:
//!
//! - `GET  /api/config`: settings the browser needs (default sheet id)
//! - `GET  /api/sheets/:sheet/range?range=A1:B2`: read a block of a day's sheet
//! - `POST /api/sheets/:sheet/rows`: save the filled rows of the entry grid
//! - `POST /api/logs`: relay a browser log line into the server log
//!
//! Failures are answered with an `ApiError` JSON body whose `code` tells the
//! client what happened; the HTTP status follows from that code.

pub mod config_apis;
pub mod error;
pub mod logging_apis;
pub mod sheet_apis;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub use error::AppError;

/// All `/api` routes, to be nested under `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/config", get(config_apis::get_config))
        .route("/logs", post(logging_apis::log_message))
        .nest("/sheets", sheet_apis::router())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use shared::{ClientConfig, LogResponse};
    use tower::ServiceExt;

    use crate::test_utils::{test_config, FakeGateway};
    use crate::{create_router, AppState};

    fn app() -> axum::Router {
        create_router(AppState::new(Arc::new(test_config()), Arc::new(FakeGateway::new())))
    }

    #[tokio::test]
    async fn test_config_endpoint() {
        let response = app()
            .oneshot(Request::get("/api/config").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let config: ClientConfig = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(config.default_sheet, "051025");
    }

    #[tokio::test]
    async fn test_log_relay_accepts_any_level() {
        for level in ["debug", "info", "WARN", "error", "trace"] {
            let body = serde_json::json!({"level": level, "message": "hello", "component": "EntryGrid"});
            let response = app()
                .oneshot(
                    Request::post("/api/logs")
                        .header("content-type", "application/json")
                        .body(Body::from(body.to_string()))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);

            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let reply: LogResponse = serde_json::from_slice(&bytes).unwrap();
            assert!(reply.success);
        }
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_404() {
        let response = app()
            .oneshot(Request::get("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
