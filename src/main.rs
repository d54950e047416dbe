//! streamscout binary: loads configuration from environment overrides and
//! runs the API server with graceful shutdown.

use std::sync::Arc;
use streamscout::{Config, StreamService};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(Config::from_env()?);
    let service = Arc::new(StreamService::new((*config).clone())?);

    streamscout::serve_with_shutdown(service, config).await?;
    Ok(())
}
