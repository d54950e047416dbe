//! VidSrc.to provider client
//!
//! Queries the `/vapi` JSON API and normalizes its nested
//! `result.items` response shape into [`StreamSource`] descriptors.

use super::{ProviderId, SourceProvider, normalize_base};
use crate::error::{Error, Result};
use crate::types::{EpisodeRef, MediaId, StreamSource};
use serde::Deserialize;
use url::Url;

/// Client for the VidSrc.to upstream.
pub struct VidSrcTo {
    client: reqwest::Client,
    base: String,
}

impl VidSrcTo {
    /// Create a client against the given base URL (e.g. `https://vidsrc.to`).
    pub fn new(client: reqwest::Client, base: &str) -> Self {
        Self {
            client,
            base: normalize_base(base),
        }
    }

    /// Build the lookup endpoint: `/vapi/movie/{id}` for movies,
    /// `/vapi/tv/{id}/{season}/{episode}` for episodic content.
    fn endpoint(&self, media: &MediaId, episode: Option<EpisodeRef>) -> Result<Url> {
        let raw = match episode {
            Some(ep) => format!(
                "{}/vapi/tv/{}/{}/{}",
                self.base, media, ep.season, ep.episode
            ),
            None => format!("{}/vapi/movie/{}", self.base, media),
        };
        Url::parse(&raw).map_err(|e| Error::Upstream {
            provider: self.id().label().to_string(),
            reason: format!("invalid endpoint url {raw}: {e}"),
        })
    }
}

#[async_trait::async_trait]
impl SourceProvider for VidSrcTo {
    fn id(&self) -> ProviderId {
        ProviderId::VidSrcTo
    }

    async fn lookup(
        &self,
        media: &MediaId,
        episode: Option<EpisodeRef>,
    ) -> Result<Vec<StreamSource>> {
        let url = self.endpoint(media, episode)?;
        tracing::debug!(provider = %self.id(), url = %url, "looking up sources");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Upstream {
                provider: self.id().label().to_string(),
                reason: format!("request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream {
                provider: self.id().label().to_string(),
                reason: format!("unexpected status {status}"),
            });
        }

        let body: VidSrcToResponse =
            response.json().await.map_err(|e| Error::Upstream {
                provider: self.id().label().to_string(),
                reason: format!("unparseable response: {e}"),
            })?;

        let provider = self.id();
        let sources: Vec<StreamSource> = body
            .result
            .items
            .into_iter()
            .filter_map(|item| {
                let source = item.into_source(provider);
                if source.is_none() {
                    tracing::warn!(provider = %provider, "dropped source entry without url");
                }
                source
            })
            .collect();

        tracing::debug!(provider = %provider, count = sources.len(), "lookup complete");
        Ok(sources)
    }
}

// ============================================================================
// Upstream response schema
// ============================================================================

/// Top-level `/vapi` response envelope.
#[derive(Debug, Deserialize)]
struct VidSrcToResponse {
    #[serde(default)]
    result: VidSrcToResult,
}

#[derive(Debug, Default, Deserialize)]
struct VidSrcToResult {
    #[serde(default)]
    items: Vec<VidSrcToItem>,
}

/// One upstream item. Every field is optional; absent fields degrade to
/// omitted metadata, not errors.
#[derive(Debug, Deserialize)]
struct VidSrcToItem {
    name: Option<String>,
    file: Option<String>,
    quality: Option<String>,
    lang: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl VidSrcToItem {
    /// Normalize into a [`StreamSource`], or `None` when the entry has no
    /// usable url.
    fn into_source(self, provider: ProviderId) -> Option<StreamSource> {
        let url = self.file.filter(|f| !f.trim().is_empty())?;
        Some(StreamSource {
            provider: self
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| provider.label().to_string()),
            url,
            quality: self.quality,
            language: self.lang,
            kind: self.kind,
        })
    }
}
