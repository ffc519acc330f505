use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use aeroplof_api::{app, AppState};
use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aeroplof_api=debug,aeroplof_store=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = aeroplof_store::app_config::Config::load().context("Failed to load config")?;
    tracing::info!("Starting Aeroplof booking API on port {}", config.server.port);

    let store = aeroplof_store::seed::build_store(&config).context("Failed to load flights")?;
    tracing::info!("{} flights available", store.len());

    let session_ttl = Duration::from_secs(config.sessions.idle_ttl_seconds);
    let app = app(AppState::with_session_ttl(Arc::new(store), session_ttl));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
