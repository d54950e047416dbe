//! Route handlers for the REST API
//!
//! Handlers are organized by domain:
//! - [`streams`] — Stream source lookups (single-provider and combined)
//! - [`subs`] — Subtitle retrieval
//! - [`system`] — Service info, health, OpenAPI spec

use serde::{Deserialize, Serialize};

mod streams;
mod subs;
mod system;

// Re-export all handlers so `routes::function_name` continues to work
pub use streams::*;
pub use subs::*;
pub use system::*;

// ============================================================================
// Query types (shared across handlers)
// ============================================================================

/// Query parameters for the stream lookup routes
///
/// `s` and `e` are forwarded upstream only when BOTH are present; a lone
/// value is ignored and the lookup falls back to movie-type.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::IntoParams)]
pub struct LookupQuery {
    /// Season number (only meaningful together with `e`)
    pub s: Option<u32>,
    /// Episode number (only meaningful together with `s`)
    pub e: Option<u32>,
    /// Preferred subtitle language (default "eng"; accepted for
    /// compatibility, not currently forwarded upstream)
    pub l: Option<String>,
}

/// Query parameters for GET /subs
#[derive(Debug, Deserialize, Serialize, utoipa::IntoParams)]
pub struct SubtitleQuery {
    /// URL of the gzip-compressed subtitle file to fetch
    pub url: String,
}
