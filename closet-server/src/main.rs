use anyhow::{Context, Result};
use closet_server::backend::{cors_layer, create_router, initialize_backend};
use closet_server::config::AppConfig;
use tracing::info;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load()?;
    let app_state = initialize_backend(&config)?;
    let router = create_router(app_state, cors_layer(config.allowed_origin.as_deref())?);

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address))?;
    info!("🌐 Digital Closet API listening on http://{}", config.bind_address);

    axum::serve(listener, router).await?;
    Ok(())
}
