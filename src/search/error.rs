//! Error types for search operations

use crate::error::AppError;

/// Result type for search operations
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while talking to the search service
///
/// Variants fall into two classes. Configuration errors (`InvalidConfiguration`,
/// `InvalidQuery`) are raised before any network I/O and always reach the caller.
/// Query errors (`RequestFailed`, `ServiceError`, `MalformedResponse`) come from a
/// remote call and are expected to be downgraded to a "no results" notice by the
/// front end.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Invalid or missing connection parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Invalid request parameters
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Transport-level failure (connect, TLS, timeout)
    #[error("Search request failed: {0}")]
    RequestFailed(#[source] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Search service returned status {status}: {message}")]
    ServiceError { status: u16, message: String },

    /// The service answered with a body we could not decode
    #[error("Malformed search response: {0}")]
    MalformedResponse(String),
}

impl SearchError {
    /// True for errors raised before any remote call was made
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SearchError::InvalidConfiguration(_) | SearchError::InvalidQuery(_)
        )
    }

    /// True for failures of a remote call
    pub fn is_query_error(&self) -> bool {
        !self.is_config_error()
    }
}

impl From<validator::ValidationErrors> for SearchError {
    fn from(err: validator::ValidationErrors) -> Self {
        SearchError::InvalidQuery(err.to_string())
    }
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::InvalidConfiguration(msg) => AppError::Configuration(msg),
            SearchError::InvalidQuery(msg) => AppError::Validation(msg),
            other => AppError::Upstream(other.to_string()),
        }
    }
}
