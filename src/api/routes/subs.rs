//! Subtitle retrieval handler.

use super::SubtitleQuery;
use crate::api::AppState;
use crate::error::Result;
use crate::types::SubtitlePayload;
use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};

/// GET /subs - Fetch and decompress a remote subtitle file
///
/// The body at `url` is treated as gzip-compressed UTF-8 text and returned
/// decompressed as an attachment. Any fetch or decompression failure maps
/// to an opaque 500; the cause is logged server-side only.
#[utoipa::path(
    get,
    path = "/subs",
    tag = "subtitles",
    params(SubtitleQuery),
    responses(
        (status = 200, description = "Decompressed subtitle text as attachment",
         content_type = "application/octet-stream"),
        (status = 500, description = "Fetch or decompression failure (generic message)",
         body = crate::error::ApiError)
    )
)]
pub async fn fetch_subtitle(
    State(state): State<AppState>,
    Query(query): Query<SubtitleQuery>,
) -> Result<impl IntoResponse> {
    let payload = state.service.subtitle(&query.url).await?;

    Ok((
        [
            (header::CONTENT_TYPE, SubtitlePayload::MEDIA_TYPE),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=subtitle.srt",
            ),
        ],
        payload.text,
    ))
}
