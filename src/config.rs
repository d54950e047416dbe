//! Configuration types for streamscout

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;
use utoipa::ToSchema;

/// API server configuration (bind address, CORS, documentation)
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ServerConfig {
    /// Address the API server binds to (default: 0.0.0.0:8000)
    #[serde(default = "default_bind_address")]
    #[schema(value_type = String)]
    pub bind_address: SocketAddr,

    /// Whether to apply CORS middleware (default: true)
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Allowed CORS origins; "*" allows any origin (default: ["*"])
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Serve interactive Swagger UI at /swagger-ui (default: false)
    #[serde(default)]
    pub swagger_ui: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            cors_enabled: true,
            cors_origins: default_cors_origins(),
            swagger_ui: false,
        }
    }
}

/// Upstream provider configuration (base URLs, request timeout)
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UpstreamConfig {
    /// Base URL for the VidSrc.to provider
    #[serde(default = "default_vidsrc_to_base")]
    pub vidsrc_to_base: String,

    /// Base URL for the VidSrc.me provider
    #[serde(default = "default_vidsrc_me_base")]
    pub vidsrc_me_base: String,

    /// Per-request timeout for upstream calls in seconds (default: 30)
    ///
    /// Applied to the shared HTTP client. Bounds how long one aggregation
    /// request can hang on a slow provider; it does not change the
    /// all-or-nothing aggregation contract.
    #[serde(default = "default_request_timeout", with = "duration_serde")]
    #[schema(value_type = u64)]
    pub request_timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            vidsrc_to_base: default_vidsrc_to_base(),
            vidsrc_me_base: default_vidsrc_me_base(),
            request_timeout: default_request_timeout(),
        }
    }
}

/// Main configuration for the streamscout service
///
/// Passed explicitly to [`StreamService::new`](crate::StreamService::new);
/// there is no ambient global state. Sub-config fields are flattened for a
/// flat JSON/TOML serialization format.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct Config {
    /// API server settings
    #[serde(flatten)]
    pub server: ServerConfig,

    /// Upstream provider settings
    #[serde(flatten)]
    pub upstream: UpstreamConfig,
}

impl Config {
    /// Build a configuration from defaults with `STREAMSCOUT_*` environment
    /// overrides applied.
    ///
    /// Recognized variables:
    /// - `STREAMSCOUT_BIND` - socket address to bind
    /// - `STREAMSCOUT_VIDSRC_TO_BASE` - VidSrc.to base URL
    /// - `STREAMSCOUT_VIDSRC_ME_BASE` - VidSrc.me base URL
    /// - `STREAMSCOUT_TIMEOUT_SECS` - upstream request timeout
    /// - `STREAMSCOUT_CORS_ORIGINS` - comma-separated origin list
    /// - `STREAMSCOUT_SWAGGER_UI` - "true" to serve Swagger UI
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Self::default();

        if let Ok(bind) = std::env::var("STREAMSCOUT_BIND") {
            config.server.bind_address =
                bind.parse().map_err(|_| crate::Error::Config {
                    message: format!("invalid bind address: {bind}"),
                    key: Some("bind_address".to_string()),
                })?;
        }
        if let Ok(base) = std::env::var("STREAMSCOUT_VIDSRC_TO_BASE") {
            config.upstream.vidsrc_to_base = base;
        }
        if let Ok(base) = std::env::var("STREAMSCOUT_VIDSRC_ME_BASE") {
            config.upstream.vidsrc_me_base = base;
        }
        if let Ok(secs) = std::env::var("STREAMSCOUT_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| crate::Error::Config {
                message: format!("invalid timeout: {secs}"),
                key: Some("request_timeout".to_string()),
            })?;
            config.upstream.request_timeout = Duration::from_secs(secs);
        }
        if let Ok(origins) = std::env::var("STREAMSCOUT_CORS_ORIGINS") {
            config.server.cors_origins = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }
        if let Ok(swagger) = std::env::var("STREAMSCOUT_SWAGGER_UI") {
            config.server.swagger_ui = swagger == "true" || swagger == "1";
        }

        Ok(config)
    }
}

fn default_bind_address() -> SocketAddr {
    // Port chosen to match common FastAPI-era deployments of this service
    ([0, 0, 0, 0], 8000).into()
}

fn default_true() -> bool {
    true
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_vidsrc_to_base() -> String {
    "https://vidsrc.to".to_string()
}

fn default_vidsrc_me_base() -> String {
    "https://vidsrc.me".to_string()
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

// Duration serialization helper (serialized as whole seconds)
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_serviceable() {
        let config = Config::default();
        assert_eq!(config.server.bind_address.port(), 8000);
        assert!(config.server.cors_enabled);
        assert_eq!(config.server.cors_origins, vec!["*"]);
        assert!(!config.server.swagger_ui);
        assert_eq!(config.upstream.vidsrc_to_base, "https://vidsrc.to");
        assert_eq!(config.upstream.vidsrc_me_base, "https://vidsrc.me");
        assert_eq!(config.upstream.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.server.bind_address, config.server.bind_address);
        assert_eq!(
            parsed.upstream.request_timeout,
            config.upstream.request_timeout
        );
    }

    #[test]
    fn test_config_deserializes_flat_format() {
        let json = r#"{
            "bind_address": "127.0.0.1:9000",
            "cors_enabled": false,
            "vidsrc_to_base": "http://localhost:1234",
            "request_timeout": 5
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.server.bind_address.port(), 9000);
        assert!(!config.server.cors_enabled);
        assert_eq!(config.upstream.vidsrc_to_base, "http://localhost:1234");
        assert_eq!(config.upstream.request_timeout, Duration::from_secs(5));
        // Unspecified fields fall back to defaults
        assert_eq!(config.upstream.vidsrc_me_base, "https://vidsrc.me");
    }
}
