//! # streamscout
//!
//! Stream source aggregation service: given a media identifier, queries one
//! or more upstream providers for playable stream links, and fetches and
//! decompresses remote subtitle files for attachment-style delivery.
//!
//! ## Design
//!
//! - **Provider clients** ([`providers`]) wrap one upstream each and
//!   normalize its proprietary response into common [`StreamSource`]
//!   descriptors.
//! - The **aggregator** ([`aggregator`]) fans lookups out across providers
//!   concurrently and merges results in a fixed, deterministic provider
//!   order; aggregation is all-or-nothing.
//! - The **subtitle retriever** ([`subtitles`]) fetches a remote resource,
//!   gunzips it, and returns the decompressed text.
//!
//! Configuration is explicit: [`StreamService::new`] takes a [`Config`],
//! there is no global mutable state, and every request is self-contained.
//!
//! ## Quick Start
//!
//! ```no_run
//! use streamscout::{Config, StreamService};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Arc::new(Config::default());
//!     let service = Arc::new(StreamService::new((*config).clone())?);
//!
//!     streamscout::serve_with_shutdown(service, config).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Provider fan-out and result merging
pub mod aggregator;
/// REST API module
pub mod api;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Upstream source providers
pub mod providers;
/// Core service facade
pub mod service;
/// Subtitle retrieval pipeline
pub mod subtitles;
/// Core domain types
pub mod types;

// Re-export commonly used types
pub use aggregator::Aggregator;
pub use config::{Config, ServerConfig, UpstreamConfig};
pub use error::{ApiError, Error, ErrorDetail, Result, ToHttpStatus};
pub use providers::{ProviderId, SourceProvider, VidSrcMe, VidSrcTo};
pub use service::StreamService;
pub use subtitles::SubtitleRetriever;
pub use types::{
    EpisodeRef, MediaId, ServiceInfo, SourceList, StreamSource, SubtitlePayload,
};

use std::sync::Arc;

/// Run the API server until a termination signal arrives.
///
/// - **Unix:** listens for SIGTERM and SIGINT, falling back to `ctrl_c` if
///   signal registration fails.
/// - **Windows/other:** listens for Ctrl+C via `tokio::signal::ctrl_c()`.
pub async fn serve_with_shutdown(
    service: Arc<StreamService>,
    config: Arc<Config>,
) -> Result<()> {
    tokio::select! {
        result = api::start_api_server(service, config) => result,
        _ = wait_for_signal() => {
            tracing::info!("Shutting down");
            Ok(())
        }
    }
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    // Signal registration can fail in restricted environments (containers, tests)
    match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
        (Ok(mut sigterm), Ok(mut sigint)) => {
            tokio::select! {
                _ = sigterm.recv() => tracing::info!("Received SIGTERM signal"),
                _ = sigint.recv() => tracing::info!("Received SIGINT signal (Ctrl+C)"),
            }
        }
        _ => {
            tracing::warn!("Could not register signal handlers, using ctrl_c fallback");
            tokio::signal::ctrl_c().await.ok();
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C signal"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for Ctrl+C signal"),
    }
}
