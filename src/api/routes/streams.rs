//! Stream lookup handlers: single-provider and combined endpoints.

use super::LookupQuery;
use crate::api::AppState;
use crate::error::Result;
use crate::providers::ProviderId;
use crate::service::StreamService;
use crate::types::{EpisodeRef, MediaId, SourceList};
use axum::{
    Json,
    extract::{Path, Query, State},
};

/// Shared body for the three lookup routes; only the provider set differs.
async fn lookup(
    state: &AppState,
    id: &str,
    query: &LookupQuery,
    providers: &[ProviderId],
) -> Result<SourceList> {
    let media = MediaId::parse(id)?;
    let episode = EpisodeRef::from_parts(query.s, query.e);
    let sources = state.service.sources(&media, episode, providers).await?;
    Ok(SourceList::success(sources))
}

/// GET /vidsrc/:id - Stream sources from VidSrc.to only
#[utoipa::path(
    get,
    path = "/vidsrc/{id}",
    tag = "streams",
    params(
        ("id" = String, Path, description = "Media identifier (e.g. IMDB id)"),
        LookupQuery
    ),
    responses(
        (status = 200, description = "Normalized stream sources", body = crate::types::SourceList),
        (status = 404, description = "Empty or invalid media id", body = crate::error::ApiError),
        (status = 502, description = "Upstream provider failure", body = crate::error::ApiError)
    )
)]
pub async fn vidsrc_lookup(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<SourceList>> {
    lookup(&state, &id, &query, &[ProviderId::VidSrcTo])
        .await
        .map(Json)
}

/// GET /vsrcme/:id - Stream sources from VidSrc.me only
#[utoipa::path(
    get,
    path = "/vsrcme/{id}",
    tag = "streams",
    params(
        ("id" = String, Path, description = "Media identifier (e.g. IMDB id)"),
        LookupQuery
    ),
    responses(
        (status = 200, description = "Normalized stream sources", body = crate::types::SourceList),
        (status = 404, description = "Empty or invalid media id", body = crate::error::ApiError),
        (status = 502, description = "Upstream provider failure", body = crate::error::ApiError)
    )
)]
pub async fn vsrcme_lookup(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<SourceList>> {
    lookup(&state, &id, &query, &[ProviderId::VidSrcMe])
        .await
        .map(Json)
}

/// GET /streams/:id - Combined stream sources from all providers
///
/// Providers are queried concurrently; results are concatenated in the
/// fixed order VidSrc.me then VidSrc.to. All-or-nothing: any provider
/// failure fails the request.
#[utoipa::path(
    get,
    path = "/streams/{id}",
    tag = "streams",
    params(
        ("id" = String, Path, description = "Media identifier (e.g. IMDB id)"),
        LookupQuery
    ),
    responses(
        (status = 200, description = "Concatenated stream sources from all providers", body = crate::types::SourceList),
        (status = 404, description = "Empty or invalid media id", body = crate::error::ApiError),
        (status = 502, description = "Any upstream provider failure", body = crate::error::ApiError)
    )
)]
pub async fn combined_lookup(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<SourceList>> {
    lookup(&state, &id, &query, &StreamService::COMBINED_ORDER)
        .await
        .map(Json)
}
