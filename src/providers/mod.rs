//! Upstream source providers
//!
//! Each provider wraps one upstream service with its own request shape and
//! proprietary response format, and normalizes results into
//! [`StreamSource`](crate::types::StreamSource) descriptors. Providers are
//! independent: they share an HTTP client but no mutable state, so lookups
//! can be fanned out concurrently.

use crate::error::Result;
use crate::types::{EpisodeRef, MediaId, StreamSource};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

mod vidsrc_me;
mod vidsrc_to;

pub use vidsrc_me::VidSrcMe;
pub use vidsrc_to::VidSrcTo;

/// Identifies one of the configured upstream providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProviderId {
    /// The VidSrc.to upstream
    VidSrcTo,
    /// The VidSrc.me upstream
    VidSrcMe,
}

impl ProviderId {
    /// Human-readable provider label, used in logs, errors, and as the
    /// fallback `provider` field on normalized sources.
    pub fn label(&self) -> &'static str {
        match self {
            ProviderId::VidSrcTo => "vidsrc.to",
            ProviderId::VidSrcMe => "vidsrc.me",
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A client for one upstream source of stream links.
///
/// Implementations build an upstream-specific request, issue it over the
/// network, and parse the provider's own response shape into normalized
/// descriptors. Malformed individual entries are dropped; an unreachable
/// upstream, non-2xx status, or unparseable body fails the whole lookup
/// with [`Error::Upstream`](crate::Error::Upstream). No retries.
#[async_trait::async_trait]
pub trait SourceProvider: Send + Sync {
    /// Which provider this client talks to
    fn id(&self) -> ProviderId;

    /// Look up stream links for a title.
    ///
    /// `episode` is `Some` only for episodic lookups; `None` means a
    /// movie-type lookup.
    async fn lookup(
        &self,
        media: &MediaId,
        episode: Option<EpisodeRef>,
    ) -> Result<Vec<StreamSource>>;
}

/// Strip a trailing slash so endpoint paths can be appended uniformly.
pub(crate) fn normalize_base(base: &str) -> String {
    base.trim_end_matches('/').to_string()
}
