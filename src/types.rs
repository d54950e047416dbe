//! Core domain types: media identifiers, stream descriptors, response envelopes.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Opaque identifier for a title in an external database (e.g. an IMDB id).
///
/// Guaranteed non-empty and non-whitespace once constructed; all validation
/// happens in [`MediaId::parse`] so providers never see an invalid id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaId(String);

impl MediaId {
    /// Validate and wrap a raw identifier.
    ///
    /// Empty or whitespace-only input is rejected with a validation error
    /// that names the offending id verbatim.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(Error::Validation { id: raw.to_string() });
        }
        Ok(Self(raw.to_string()))
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MediaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Season/episode pair for episodic lookups.
///
/// Only exists when both numbers are known; a lone season or lone episode
/// never produces an `EpisodeRef` (see [`EpisodeRef::from_parts`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeRef {
    /// Season number
    pub season: u32,
    /// Episode number within the season
    pub episode: u32,
}

impl EpisodeRef {
    /// Build an episode reference from optional query parameters.
    ///
    /// Returns `Some` only when BOTH season and episode are present. A lone
    /// `s` or lone `e` degrades to a movie-style lookup (`None`) rather than
    /// guessing a default for the missing half.
    pub fn from_parts(season: Option<u32>, episode: Option<u32>) -> Option<Self> {
        match (season, episode) {
            (Some(season), Some(episode)) => Some(Self { season, episode }),
            _ => None,
        }
    }
}

/// Normalized descriptor for one playable stream link.
///
/// This is the common shape every provider's proprietary response is
/// flattened into. `url` is always non-empty; upstream entries without a
/// usable url are dropped during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StreamSource {
    /// Name of the server/provider this link came from
    pub provider: String,

    /// Playable stream URL (never empty)
    pub url: String,

    /// Quality label (e.g. "1080p"), when the upstream reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,

    /// Audio/subtitle language, when the upstream reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Stream type (e.g. "hls"), when the upstream reports one
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Response envelope for the stream lookup routes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SourceList {
    /// Always 200 on success (mirrored in the HTTP status)
    pub status: u16,

    /// Human-readable outcome, "success" on the happy path
    pub info: String,

    /// Ordered stream descriptors: provider invocation order, then each
    /// provider's own order. Duplicates across providers are preserved.
    pub sources: Vec<StreamSource>,
}

impl SourceList {
    /// Wrap an aggregated source list in the success envelope
    pub fn success(sources: Vec<StreamSource>) -> Self {
        Self {
            status: 200,
            info: "success".to_string(),
            sources,
        }
    }
}

/// Static descriptive metadata served at the service root.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// Service name
    pub name: String,
    /// Crate version
    pub version: String,
    /// One-line description
    pub description: String,
    /// Available routes
    pub routes: Vec<String>,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Stream source aggregation service".to_string(),
            routes: vec![
                "/vidsrc/{id}".to_string(),
                "/vsrcme/{id}".to_string(),
                "/streams/{id}".to_string(),
                "/subs".to_string(),
            ],
        }
    }
}

/// Decompressed subtitle content, ready for attachment-style delivery.
///
/// Request-scoped; the whole payload is materialized in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitlePayload {
    /// The decompressed UTF-8 subtitle text
    pub text: String,
}

impl SubtitlePayload {
    /// Fixed filename used in the Content-Disposition header
    pub const FILENAME: &'static str = "subtitle.srt";

    /// Fixed media type used in the Content-Type header
    pub const MEDIA_TYPE: &'static str = "application/octet-stream";
}
