//! Provider fan-out and result merging
//!
//! The aggregator owns the provider registry and turns one media lookup
//! into one or more concurrent upstream lookups, merged back into a single
//! ordered list.

use crate::error::{Error, Result};
use crate::providers::{ProviderId, SourceProvider, VidSrcMe, VidSrcTo};
use crate::types::{EpisodeRef, MediaId, StreamSource};
use std::sync::Arc;

/// Dispatches lookups across registered providers and merges their output.
///
/// Merge contract: results are concatenated in the order the caller lists
/// providers (never completion order), with each provider's inner order
/// preserved. A request with a single provider degenerates to a plain
/// pass-through of that provider's result or error.
///
/// Failure contract: all-or-nothing. If any provider fails, the whole
/// aggregation fails; partial results are never returned.
pub struct Aggregator {
    providers: Vec<Arc<dyn SourceProvider>>,
}

impl Aggregator {
    /// Build the registry of real providers from configuration.
    ///
    /// All providers share one HTTP client carrying the configured
    /// upstream request timeout.
    pub fn new(config: &crate::Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.upstream.request_timeout)
            .build()?;

        Ok(Self::from_providers(vec![
            Arc::new(VidSrcTo::new(client.clone(), &config.upstream.vidsrc_to_base)),
            Arc::new(VidSrcMe::new(client, &config.upstream.vidsrc_me_base)),
        ]))
    }

    /// Build an aggregator over an explicit provider set (test seam).
    pub fn from_providers(providers: Vec<Arc<dyn SourceProvider>>) -> Self {
        Self { providers }
    }

    fn provider(&self, id: ProviderId) -> Result<&Arc<dyn SourceProvider>> {
        self.providers
            .iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| Error::Upstream {
                provider: id.label().to_string(),
                reason: "provider not registered".to_string(),
            })
    }

    /// Look up `media` on every provider in `providers`, concurrently, and
    /// concatenate the results in the given provider order.
    ///
    /// The lookups are joined with `try_join_all`, so all upstream requests
    /// are in flight simultaneously and the first failure aborts the whole
    /// aggregation.
    pub async fn aggregate(
        &self,
        media: &MediaId,
        episode: Option<EpisodeRef>,
        providers: &[ProviderId],
    ) -> Result<Vec<StreamSource>> {
        let clients = providers
            .iter()
            .map(|id| self.provider(*id))
            .collect::<Result<Vec<_>>>()?;

        let lookups = clients.iter().map(|client| client.lookup(media, episode));
        let results = futures::future::try_join_all(lookups).await?;

        let merged: Vec<StreamSource> = results.into_iter().flatten().collect();
        tracing::debug!(
            media = %media,
            providers = providers.len(),
            sources = merged.len(),
            "aggregation complete"
        );
        Ok(merged)
    }
}
