//! Query request construction and validation

use crate::search::document::SELECT_FIELDS;
use crate::search::error::SearchResult;
use serde::Serialize;
use validator::Validate;

/// Number of results the CLI asks for
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// A validated free-text lookup
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct QueryRequest {
    #[validate(length(min = 1, message = "description must not be empty"))]
    description: String,

    #[validate(range(min = 1, message = "max_results must be at least 1"))]
    max_results: usize,
}

impl QueryRequest {
    /// Build a request, trimming the description.
    ///
    /// Fails with `InvalidQuery` for a blank description or `max_results == 0`.
    pub fn new(description: impl AsRef<str>, max_results: usize) -> SearchResult<Self> {
        let request = Self {
            description: description.as_ref().trim().to_string(),
            max_results,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub(crate) fn to_body(&self) -> SearchRequestBody<'_> {
        SearchRequestBody {
            search: &self.description,
            top: self.max_results,
            select: SELECT_FIELDS.join(","),
        }
    }
}

/// JSON body of a `docs/search` POST
#[derive(Debug, Serialize)]
pub(crate) struct SearchRequestBody<'a> {
    pub search: &'a str,
    pub top: usize,
    pub select: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_trims_description() {
        let request = QueryRequest::new("  printer jammed \n", DEFAULT_MAX_RESULTS).unwrap();
        assert_eq!(request.description(), "printer jammed");
        assert_eq!(request.max_results(), 3);
    }

    #[test]
    fn test_rejects_zero_max_results() {
        let err = QueryRequest::new("printer jammed", 0).unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("max_results"));
    }

    #[test]
    fn test_rejects_blank_description() {
        let err = QueryRequest::new("   ", 3).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_body_projection() {
        let request = QueryRequest::new("outlook frozen", 1).unwrap();
        let body = serde_json::to_value(request.to_body()).unwrap();

        assert_eq!(body["search"], "outlook frozen");
        assert_eq!(body["top"], 1);
        assert_eq!(
            body["select"],
            "ticket_id,description,service_category,root_cause,resolution_steps,resolution_summary,kb_article_id"
        );
    }
}
