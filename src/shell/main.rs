use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

use events_api::shell::config::Config;
use events_api::shell::http::router;
use events_api::shell::server::{serve, shutdown_signal};
use events_api::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;
    let state = AppState::build(config.seed_mode).await?;
    let app = router(state);

    let addr = SocketAddr::new(config.host, config.port);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, seed_mode = ?config.seed_mode, "events endpoint: http://{}/api/events", addr);

    if let Err(error) = serve(listener, app, config.shutdown_timeout, shutdown_signal()).await {
        tracing::error!(%error, "server stopped with an error");
        return Err(error.into());
    }

    tracing::info!("server exiting");
    Ok(())
}
