use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use shared::{CellRange, RangeResponse, SaveRowsRequest, SaveRowsResponse, SheetId};
use tracing::{error, info};

use super::error::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub range: Option<String>,
}

/// Create a router for sheet read/write APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:sheet/range", get(get_range))
        .route("/:sheet/rows", post(save_rows))
}

/// GET /api/sheets/:sheet/range?range=A1:B2
async fn get_range(
    State(state): State<AppState>,
    Path(sheet): Path<String>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<RangeResponse>, AppError> {
    info!("GET /api/sheets/{}/range - query: {:?}", sheet, query);

    let sheet = SheetId::parse(&sheet)?;
    let range = query
        .range
        .ok_or_else(|| AppError::BadRequest("missing `range` query parameter".to_string()))?;
    let range = CellRange::parse(&range)?;

    let response = state.sales_service.load_range(&sheet, &range).await?;
    Ok(Json(response))
}

/// POST /api/sheets/:sheet/rows
async fn save_rows(
    State(state): State<AppState>,
    Path(sheet): Path<String>,
    payload: Result<Json<SaveRowsRequest>, JsonRejection>,
) -> Result<Json<SaveRowsResponse>, AppError> {
    let sheet = SheetId::parse(&sheet)?;
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    info!("POST /api/sheets/{}/rows - {} rows", sheet, request.rows.len());

    match state.sales_service.save_rows(&sheet, request.rows).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            error!("Error saving rows to sheet {}: {}", sheet, e);
            Err(e.into())
        }
    }
}
