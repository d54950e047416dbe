//! OpenAPI documentation and schema generation
//!
//! Defines the OpenAPI specification for the streamscout REST API using
//! utoipa for compile-time spec generation.

use utoipa::OpenApi;

/// OpenAPI documentation for the streamscout REST API
///
/// The spec can be accessed via:
/// - `/openapi.json` - JSON format OpenAPI specification
/// - `/swagger-ui` - Interactive Swagger UI documentation (when enabled)
#[derive(OpenApi)]
#[openapi(
    info(
        title = "streamscout REST API",
        version = "0.1.0",
        description = "Queries upstream providers for playable stream links and serves decompressed subtitle files",
        license(
            name = "MIT OR Apache-2.0"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        // Stream lookups
        crate::api::routes::vidsrc_lookup,
        crate::api::routes::vsrcme_lookup,
        crate::api::routes::combined_lookup,

        // Subtitles
        crate::api::routes::fetch_subtitle,

        // System
        crate::api::routes::service_info,
        crate::api::routes::health_check,
        crate::api::routes::openapi_spec,
    ),
    components(schemas(
        // Core types from types.rs
        crate::types::StreamSource,
        crate::types::SourceList,
        crate::types::ServiceInfo,

        // Config types from config.rs
        crate::config::Config,
        crate::config::ServerConfig,
        crate::config::UpstreamConfig,

        // Provider identifiers
        crate::providers::ProviderId,

        // Error types from error.rs
        crate::error::ApiError,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "streams", description = "Stream lookups - Query upstream providers for playable links"),
        (name = "subtitles", description = "Subtitles - Fetch and decompress remote subtitle files"),
        (name = "system", description = "System endpoints - Service info, health, OpenAPI spec"),
    )
)]
pub struct ApiDoc;
