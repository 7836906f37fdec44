//! # Backend
//!
//! Server side of the daily sales tool. It holds the configuration, owns the
//! client for the spreadsheet endpoint, answers the browser app's `/api`
//! calls and serves the compiled app itself.
//!
//! ```text
//! Browser (yew app)
//!     ↓  /api JSON
//! IO layer (REST handlers, error mapping)
//!     ↓
//! Domain layer (SalesService)
//!     ↓
//! Gateway (spreadsheet web-app endpoint over HTTPS)
//! ```

pub mod config;
pub mod domain;
pub mod gateway;
pub mod io;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::domain::SalesService;
use crate::gateway::{AppsScriptGateway, SheetGateway};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sales_service: SalesService,
}

impl AppState {
    pub fn new(config: Arc<Config>, gateway: Arc<dyn SheetGateway>) -> Self {
        let sales_service = SalesService::new(gateway, Arc::clone(&config));
        Self {
            config,
            sales_service,
        }
    }
}

/// Initialize the backend with the real spreadsheet gateway
pub fn initialize_backend(config: Config) -> anyhow::Result<AppState> {
    info!("Setting up spreadsheet gateway");
    let gateway = AppsScriptGateway::new(config.gateway_url.clone())?;

    info!("Setting up application state");
    Ok(AppState::new(Arc::new(config), Arc::new(gateway)))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    let static_dir = app_state.config.static_dir.clone();
    let index = static_dir.join("index.html");

    // Unknown paths get index.html so deep links like /eod-report/051025 boot the app
    let frontend = ServeDir::new(static_dir).fallback(ServeFile::new(index));

    let mut router = Router::new()
        .nest("/api", io::router())
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http());

    match app_state.config.cors_origin.parse::<HeaderValue>() {
        Ok(origin) => {
            let cors = CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any);
            router = router.layer(cors);
        }
        Err(_) => warn!(
            "Ignoring CORS origin {:?}: not a valid header value",
            app_state.config.cors_origin
        ),
    }

    router.with_state(app_state)
}
