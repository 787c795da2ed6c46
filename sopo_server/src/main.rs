use sopo_server::{app, AppState, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // no request is served without a signing secret
    let config = ServerConfig::from_env()?;
    let addr = config.bind;
    info!(base_url = %config.base_url, "configuration loaded");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, app(AppState::from(config))).await?;
    Ok(())
}
