use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::{ApiError, CellRangeError, ErrorCode, SheetIdError};

use crate::gateway::GatewayError;

/// Every way an `/api` handler can fail.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("invalid sheet id: {0}")]
    InvalidSheet(#[from] SheetIdError),
    #[error("invalid cell range: {0}")]
    InvalidRange(#[from] CellRangeError),
    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    pub fn to_api_error(&self) -> ApiError {
        match self {
            AppError::Gateway(e) => e.to_api_error(),
            AppError::InvalidSheet(_) => ApiError::new(ErrorCode::InvalidSheet, self.to_string()),
            AppError::InvalidRange(_) => ApiError::new(ErrorCode::InvalidRange, self.to_string()),
            AppError::BadRequest(_) => ApiError::new(ErrorCode::BadRequest, self.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = self.to_api_error();
        let status =
            StatusCode::from_u16(body.code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_follows_error_code() {
        let missing = AppError::Gateway(GatewayError::SheetNotFound {
            sheet: "051025".into(),
            status: Some(404),
        });
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

        let offline = AppError::Gateway(GatewayError::Network("down".into()));
        assert_eq!(offline.into_response().status(), StatusCode::BAD_GATEWAY);

        let unset = AppError::Gateway(GatewayError::Configuration);
        assert_eq!(unset.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);

        let bad = AppError::InvalidSheet(SheetIdError::Format("x".into()));
        assert_eq!(bad.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_body_carries_code() {
        let err = AppError::InvalidRange(CellRangeError::Empty);
        let body = err.to_api_error();
        assert_eq!(body.code, ErrorCode::InvalidRange);
        assert_eq!(body.message, "invalid cell range: cell range is empty");
    }
}
