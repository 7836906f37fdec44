use tillbook_backend::config::Config;
use tillbook_backend::{create_router, initialize_backend};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tillbook_backend=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();

    info!("Starting tillbook backend v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    let addr = config.bind_addr;
    info!(
        "Default sheet {}, serving frontend from {}",
        config.default_sheet,
        config.static_dir.display()
    );

    let app_state = initialize_backend(config)?;
    let app = create_router(app_state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
