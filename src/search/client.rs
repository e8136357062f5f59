//! HTTP client for the hosted incident index

use crate::config::SearchServiceConfig;
use crate::search::credential::Credential;
use crate::search::document::{IncidentRecord, QueryResult};
use crate::search::error::{SearchError, SearchResult};
use crate::search::query::QueryRequest;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// REST API version used when none is configured
pub const DEFAULT_API_VERSION: &str = "2023-11-01";

/// Search text of the liveness probe
pub const PROBE_QUERY: &str = "test";

/// Lookup of past incidents by free-text description
///
/// Both front ends depend only on this trait. `search` validates its arguments
/// before `execute` is reached, so implementations never see a blank
/// description or a zero result limit.
#[async_trait]
pub trait IncidentSearch: Send + Sync {
    /// Run a validated request against the index
    async fn execute(&self, request: &QueryRequest) -> SearchResult<QueryResult>;

    /// Best-effort reachability check; never fails
    async fn check_connectivity(&self) -> bool;

    /// Find the incidents closest to `description`, at most `max_results` of them
    async fn search(&self, description: &str, max_results: usize) -> SearchResult<QueryResult> {
        let request = QueryRequest::new(description, max_results)?;
        self.execute(&request).await
    }
}

/// Transport options for [`IncidentSearchClient`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Value of the `api-version` query parameter
    pub api_version: String,

    /// Per-request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: None,
        }
    }
}

/// Client bound to one search endpoint and index
///
/// Configuration is fixed at construction; the handle can be shared and reused
/// for any number of sequential queries.
#[derive(Debug, Clone)]
pub struct IncidentSearchClient {
    client: Client,
    search_url: Url,
    endpoint: String,
    index_name: String,
    credential: Credential,
}

#[derive(Debug, Deserialize)]
struct SearchResponseBody {
    #[serde(default)]
    value: Vec<IncidentRecord>,
}

#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    error: ServiceErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ServiceErrorDetail {
    message: String,
}

impl IncidentSearchClient {
    /// Create a client with default options. Performs no network I/O.
    pub fn connect(endpoint: &str, index_name: &str, credential: Credential) -> SearchResult<Self> {
        Self::with_options(endpoint, index_name, credential, ClientOptions::default())
    }

    /// Create a client with explicit transport options
    pub fn with_options(
        endpoint: &str,
        index_name: &str,
        credential: Credential,
        options: ClientOptions,
    ) -> SearchResult<Self> {
        let endpoint = endpoint.trim();
        if endpoint.is_empty() {
            return Err(SearchError::InvalidConfiguration(
                "search endpoint is empty".to_string(),
            ));
        }

        let index_name = index_name.trim();
        if index_name.is_empty() {
            return Err(SearchError::InvalidConfiguration(
                "index name is empty".to_string(),
            ));
        }

        let search_url = build_search_url(endpoint, index_name, &options.api_version)?;

        let mut builder = Client::builder()
            .user_agent(concat!("incident-resolver/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            SearchError::InvalidConfiguration(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self {
            client,
            search_url,
            endpoint: endpoint.to_string(),
            index_name: index_name.to_string(),
            credential,
        })
    }

    /// Create a client from loaded configuration, reading the credential from the environment
    pub fn from_config(config: &SearchServiceConfig) -> SearchResult<Self> {
        let credential = config.credential()?;
        let options = ClientOptions {
            api_version: config.api_version.clone(),
            timeout: config.request_timeout_secs.map(Duration::from_secs),
        };

        Self::with_options(&config.endpoint, &config.index_name, credential, options)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }
}

#[async_trait]
impl IncidentSearch for IncidentSearchClient {
    async fn execute(&self, request: &QueryRequest) -> SearchResult<QueryResult> {
        debug!(
            index = %self.index_name,
            max_results = request.max_results(),
            "Querying incident index"
        );

        let response = self
            .client
            .post(self.search_url.clone())
            .header("api-key", self.credential.header_value().clone())
            .json(&request.to_body())
            .send()
            .await
            .map_err(SearchError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::ServiceError {
                status: status.as_u16(),
                message: service_error_message(status, &body),
            });
        }

        let body: SearchResponseBody = response
            .json()
            .await
            .map_err(|e| SearchError::MalformedResponse(e.to_string()))?;

        let mut records = body.value;
        records.truncate(request.max_results());

        info!(
            index = %self.index_name,
            hits = records.len(),
            "Incident lookup completed"
        );

        Ok(QueryResult::new(records))
    }

    async fn check_connectivity(&self) -> bool {
        let probe = match QueryRequest::new(PROBE_QUERY, 1) {
            Ok(probe) => probe,
            Err(_) => return false,
        };

        match self.execute(&probe).await {
            Ok(_) => {
                info!(endpoint = %self.endpoint, index = %self.index_name, "Search service reachable");
                true
            }
            Err(e) => {
                warn!(
                    endpoint = %self.endpoint,
                    index = %self.index_name,
                    error = %e,
                    "Search service connectivity check failed"
                );
                false
            }
        }
    }
}

fn build_search_url(endpoint: &str, index_name: &str, api_version: &str) -> SearchResult<Url> {
    let mut url = Url::parse(endpoint).map_err(|e| {
        SearchError::InvalidConfiguration(format!("invalid search endpoint '{}': {}", endpoint, e))
    })?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(SearchError::InvalidConfiguration(format!(
            "search endpoint must be an http(s) URL: '{}'",
            endpoint
        )));
    }

    url.path_segments_mut()
        .map_err(|_| {
            SearchError::InvalidConfiguration(format!(
                "search endpoint cannot be used as a base URL: '{}'",
                endpoint
            ))
        })?
        .pop_if_empty()
        .extend(["indexes", index_name, "docs", "search"]);
    url.set_query(None);
    url.query_pairs_mut().append_pair("api-version", api_version);

    Ok(url)
}

fn service_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ServiceErrorBody>(body) {
        return parsed.error.message;
    }

    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("No response body")
            .to_string()
    } else {
        body.chars().take(512).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential() -> Credential {
        Credential::new("test-key").unwrap()
    }

    #[test]
    fn test_search_url_layout() {
        let url = build_search_url(
            "https://incidenthandling.search.windows.net/",
            "incidents-kb",
            DEFAULT_API_VERSION,
        )
        .unwrap();

        assert_eq!(
            url.as_str(),
            "https://incidenthandling.search.windows.net/indexes/incidents-kb/docs/search?api-version=2023-11-01"
        );
    }

    #[test]
    fn test_connect_rejects_bad_configuration() {
        let err = IncidentSearchClient::connect("", "incidents-kb", credential()).unwrap_err();
        assert!(err.is_config_error());

        let err = IncidentSearchClient::connect("https://kb.example.com", "  ", credential())
            .unwrap_err();
        assert!(err.is_config_error());

        let err = IncidentSearchClient::connect("ftp://kb.example.com", "incidents-kb", credential())
            .unwrap_err();
        assert!(err.is_config_error());

        let err = IncidentSearchClient::connect("not a url", "incidents-kb", credential())
            .unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_connect_keeps_configuration() {
        let client =
            IncidentSearchClient::connect(" https://kb.example.com ", "incidents-kb", credential())
                .unwrap();

        assert_eq!(client.endpoint(), "https://kb.example.com");
        assert_eq!(client.index_name(), "incidents-kb");
        assert!(!format!("{:?}", client).contains("test-key"));
    }

    #[test]
    fn test_service_error_message() {
        let body = r#"{"error":{"code":"","message":"The index 'nope' was not found."}}"#;
        assert_eq!(
            service_error_message(StatusCode::NOT_FOUND, body),
            "The index 'nope' was not found."
        );
        assert_eq!(service_error_message(StatusCode::FORBIDDEN, ""), "Forbidden");
        assert_eq!(service_error_message(StatusCode::BAD_GATEWAY, " oops "), "oops");
    }
}
