//! Core service: wires the aggregator and subtitle retriever together
//! behind one constructor-driven facade consumed by the API layer.

use crate::aggregator::Aggregator;
use crate::config::Config;
use crate::error::Result;
use crate::providers::ProviderId;
use crate::subtitles::SubtitleRetriever;
use crate::types::{EpisodeRef, MediaId, ServiceInfo, StreamSource, SubtitlePayload};
use std::sync::Arc;

/// The main streamscout service.
///
/// Holds no per-request state; every lookup is request-scoped, so one
/// instance is shared across all inbound requests without locking.
pub struct StreamService {
    aggregator: Aggregator,
    subtitles: SubtitleRetriever,
    /// Service configuration
    pub config: Arc<Config>,
}

impl StreamService {
    /// Provider invocation order for the combined `/streams` endpoint:
    /// VidSrc.me first, then VidSrc.to. Fixed so identical inputs always
    /// produce identical output ordering regardless of network timing.
    pub const COMBINED_ORDER: [ProviderId; 2] = [ProviderId::VidSrcMe, ProviderId::VidSrcTo];

    /// Construct the service from explicit configuration.
    pub fn new(config: Config) -> Result<Self> {
        let aggregator = Aggregator::new(&config)?;
        let subtitle_client = reqwest::Client::builder()
            .timeout(config.upstream.request_timeout)
            .build()?;

        Ok(Self {
            aggregator,
            subtitles: SubtitleRetriever::new(subtitle_client),
            config: Arc::new(config),
        })
    }

    /// Look up stream sources on the given providers, in the given order.
    pub async fn sources(
        &self,
        media: &MediaId,
        episode: Option<EpisodeRef>,
        providers: &[ProviderId],
    ) -> Result<Vec<StreamSource>> {
        self.aggregator.aggregate(media, episode, providers).await
    }

    /// Look up stream sources on every provider, in the fixed combined order.
    pub async fn combined_sources(
        &self,
        media: &MediaId,
        episode: Option<EpisodeRef>,
    ) -> Result<Vec<StreamSource>> {
        self.sources(media, episode, &Self::COMBINED_ORDER).await
    }

    /// Fetch and decompress a remote subtitle file.
    pub async fn subtitle(&self, url: &str) -> Result<SubtitlePayload> {
        self.subtitles.retrieve(url).await
    }

    /// Static service metadata for the root route.
    pub fn info(&self) -> ServiceInfo {
        ServiceInfo::default()
    }
}
