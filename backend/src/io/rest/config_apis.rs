use axum::{extract::State, Json};
use shared::ClientConfig;
use tracing::info;

use crate::AppState;

/// GET /api/config
pub async fn get_config(State(state): State<AppState>) -> Json<ClientConfig> {
    info!("GET /api/config");
    Json(state.sales_service.client_config())
}
