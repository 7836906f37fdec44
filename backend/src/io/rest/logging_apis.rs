use axum::{extract::State, http::StatusCode, Json};
use shared::{LogRequest, LogResponse};
use tracing::{debug, error, info, warn};

use crate::AppState;

/// POST /api/logs: re-emit a browser log line through the server's logger.
pub async fn log_message(
    State(_app_state): State<AppState>,
    Json(request): Json<LogRequest>,
) -> Result<Json<LogResponse>, StatusCode> {
    let component = request.component.as_deref().unwrap_or("frontend");

    match request.level.to_lowercase().as_str() {
        "debug" => debug!(target: "frontend", component, "{}", request.message),
        "warn" => warn!(target: "frontend", component, "{}", request.message),
        "error" => error!(target: "frontend", component, "{}", request.message),
        _ => info!(target: "frontend", component, "{}", request.message),
    }

    Ok(Json(LogResponse { success: true }))
}
