use anyhow::Context;
use api::serve;
use repository::init_repository;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use util::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load().context("failed to load config")?;

    let repository = init_repository(&config.database)
        .await
        .context("failed to build repository")?;
    if config.database.create_schema {
        if let Err(e) = repository.event.create_table().await {
            warn!("events table was not created: {e}");
        }
    }

    let router = serve(repository, &config)?;

    let address = config.socket_addr()?;
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(task = "listen", %address);

    Ok(axum::serve(listener, router).await?)
}
