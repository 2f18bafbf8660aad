use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use matzip_api::{
    api::{create_router, AppState},
    config::Config,
    data::ListingStore,
    services::{AssetStore, CsvFeedbackSink},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // The dataset is loaded exactly once; a schema mismatch aborts startup.
    let listings = ListingStore::load(Path::new(&config.dataset_path))?;
    tracing::info!(
        listings = listings.len(),
        regions = listings.regions().len(),
        "Dataset loaded"
    );

    let state = AppState::new(
        Arc::new(listings),
        Arc::new(CsvFeedbackSink::new(&config.feedback_path)),
        Arc::new(AssetStore::new(&config.images_dir)),
    );
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, "matzip-api listening");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
