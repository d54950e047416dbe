//! VidSrc.me provider client
//!
//! Queries the `/api/source/{id}` endpoint, passing season/episode as query
//! parameters for episodic lookups, and normalizes its flat `sources` list.

use super::{ProviderId, SourceProvider, normalize_base};
use crate::error::{Error, Result};
use crate::types::{EpisodeRef, MediaId, StreamSource};
use serde::Deserialize;
use url::Url;

/// Client for the VidSrc.me upstream.
pub struct VidSrcMe {
    client: reqwest::Client,
    base: String,
}

impl VidSrcMe {
    /// Create a client against the given base URL (e.g. `https://vidsrc.me`).
    pub fn new(client: reqwest::Client, base: &str) -> Self {
        Self {
            client,
            base: normalize_base(base),
        }
    }

    /// Build the lookup endpoint: `/api/source/{id}`, with `s`/`e` query
    /// parameters only when the lookup is episodic.
    fn endpoint(&self, media: &MediaId, episode: Option<EpisodeRef>) -> Result<Url> {
        let raw = format!("{}/api/source/{}", self.base, media);
        let mut url = Url::parse(&raw).map_err(|e| Error::Upstream {
            provider: self.id().label().to_string(),
            reason: format!("invalid endpoint url {raw}: {e}"),
        })?;
        if let Some(ep) = episode {
            url.query_pairs_mut()
                .append_pair("s", &ep.season.to_string())
                .append_pair("e", &ep.episode.to_string());
        }
        Ok(url)
    }
}

#[async_trait::async_trait]
impl SourceProvider for VidSrcMe {
    fn id(&self) -> ProviderId {
        ProviderId::VidSrcMe
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

        let body: VidSrcMeResponse =
            response.json().await.map_err(|e| Error::Upstream {
                provider: self.id().label().to_string(),
                reason: format!("unparseable response: {e}"),
            })?;

        let provider = self.id();
        let sources: Vec<StreamSource> = body
            .sources
            .into_iter()
            .filter_map(|entry| {
                let source = entry.into_source(provider);
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

/// Top-level response: a flat list of source entries.
#[derive(Debug, Deserialize)]
struct VidSrcMeResponse {
    #[serde(default)]
    sources: Vec<VidSrcMeEntry>,
}

/// One upstream entry. The `label` field carries the quality string when
/// present. Every field is optional; only a missing/empty url drops the
/// entry.
#[derive(Debug, Deserialize)]
struct VidSrcMeEntry {
    server: Option<String>,
    url: Option<String>,
    label: Option<String>,
    language: Option<String>,
}

impl VidSrcMeEntry {
    fn into_source(self, provider: ProviderId) -> Option<StreamSource> {
        let url = self.url.filter(|u| !u.trim().is_empty())?;
        Some(StreamSource {
            provider: self
                .server
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| provider.label().to_string()),
            url,
            quality: self.label,
            language: self.language,
            kind: None,
        })
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> VidSrcMe {
        VidSrcMe::new(reqwest::Client::new(), "https://vidsrc.me")
    }

    #[test]
    fn test_movie_endpoint_has_no_query() {
        let media = MediaId::parse("tt0111161").unwrap();
        let url = client().endpoint(&media, None).unwrap();
        assert_eq!(url.as_str(), "https://vidsrc.me/api/source/tt0111161");
        assert!(url.query().is_none());
    }

    #[test]
    fn test_tv_endpoint_carries_season_and_episode() {
        let media = MediaId::parse("tt0903747").unwrap();
        let episode = EpisodeRef { season: 1, episode: 2 };
        let url = client().endpoint(&media, Some(episode)).unwrap();
        assert_eq!(
            url.as_str(),
            "https://vidsrc.me/api/source/tt0903747?s=1&e=2"
        );
    }

    #[test]
    fn test_parses_entries() {
        let body = r#"{
            "sources": [
                {"server": "Pro", "url": "https://cdn.example/x.m3u8",
                 "label": "720p", "language": "eng"},
                {"url": "https://cdn.example/y.m3u8"}
            ]
        }"#;
        let parsed: VidSrcMeResponse = serde_json::from_str(body).unwrap();
        let sources: Vec<_> = parsed
            .sources
            .into_iter()
            .filter_map(|e| e.into_source(ProviderId::VidSrcMe))
            .collect();

        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].provider, "Pro");
        assert_eq!(sources[0].quality.as_deref(), Some("720p"));
        assert_eq!(sources[1].provider, "vidsrc.me");
        assert!(sources[1].kind.is_none());
    }

    #[test]
    fn test_drops_urlless_entries() {
        let body = r#"{"sources": [{"server": "Broken"}, {"url": ""}]}"#;
        let parsed: VidSrcMeResponse = serde_json::from_str(body).unwrap();
        let sources: Vec<_> = parsed
            .sources
            .into_iter()
            .filter_map(|e| e.into_source(ProviderId::VidSrcMe))
            .collect();
        assert!(sources.is_empty());
    }

    #[test]
    fn test_missing_sources_key_is_empty_list() {
        let parsed: VidSrcMeResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.sources.is_empty());
    }
}
