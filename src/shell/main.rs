use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use anyhow::Context;
use event_scheduler::shell::config::AppConfig;
use event_scheduler::shell::http::router;
use event_scheduler::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let config = AppConfig::from_env()?;
    tokio::fs::create_dir_all(&config.data_dir)
        .await
        .with_context(|| format!("cannot create data directory {}", config.data_dir.display()))?;
    tracing::info!(
        data_dir = %config.data_dir.display(),
        prefix = %config.command_prefix,
        "event store ready"
    );

    let app = router(AppState::wire(&config)).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("cannot bind {}", config.bind_addr))?;
    tracing::info!("command endpoint: http://{}/commands", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
