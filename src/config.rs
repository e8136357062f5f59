use crate::search::{Credential, SearchError, SearchResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "INCIDENT_RESOLVER";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Remote search service configuration
    pub search: SearchServiceConfig,

    /// Web form server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from the embedded defaults, an optional file and the environment.
    ///
    /// The file is taken from `path` if given, otherwise from `CONFIG_PATH`,
    /// otherwise `config/incident-resolver.toml`. A missing file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let config_path = match path {
            Some(p) => p.to_string_lossy().into_owned(),
            None => std::env::var("CONFIG_PATH")
                .unwrap_or_else(|_| "config/incident-resolver.toml".to_string()),
        };

        config::Config::builder()
            // Start with default values
            .add_source(config::File::from_str(
                include_str!("../config/default.toml"),
                config::FileFormat::Toml,
            ))
            // Override with config file if it exists
            .add_source(config::File::with_name(&config_path).required(false))
            // Override with environment variables (prefix: INCIDENT_RESOLVER_)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchServiceConfig {
    /// Service endpoint, e.g. `https://<service>.search.windows.net`
    #[serde(default)]
    pub endpoint: String,

    /// Name of the incident index
    #[serde(default = "default_index_name")]
    pub index_name: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// REST API version sent with every request
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Request timeout (seconds). Unset means the transport default.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl SearchServiceConfig {
    /// Read the credential from the environment variable named by `api_key_env`.
    pub fn credential(&self) -> SearchResult<Credential> {
        let key = std::env::var(&self.api_key_env).map_err(|_| {
            SearchError::InvalidConfiguration(format!(
                "search credential missing: set the {} environment variable",
                self.api_key_env
            ))
        })?;
        Credential::new(key)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_http_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_http_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

// Default value functions
fn default_index_name() -> String {
    "incidents-kb".to_string()
}

fn default_api_key_env() -> String {
    "INCIDENT_SEARCH_API_KEY".to_string()
}

fn default_api_version() -> String {
    crate::search::DEFAULT_API_VERSION.to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_http_port() -> u16 {
    8501
}

fn default_log_level() -> String {
    "info".to_string()
}
