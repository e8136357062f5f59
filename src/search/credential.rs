//! Opaque API key for the search service

use crate::search::error::{SearchError, SearchResult};
use reqwest::header::HeaderValue;
use std::fmt;

/// API key sent in the `api-key` header.
///
/// The value is marked sensitive and never appears in `Debug` output.
#[derive(Clone)]
pub struct Credential(HeaderValue);

impl Credential {
    pub fn new(key: impl AsRef<str>) -> SearchResult<Self> {
        let key = key.as_ref().trim();
        if key.is_empty() {
            return Err(SearchError::InvalidConfiguration(
                "search credential is empty".to_string(),
            ));
        }

        let mut value = HeaderValue::from_str(key).map_err(|_| {
            SearchError::InvalidConfiguration(
                "search credential contains characters not allowed in an HTTP header"
                    .to_string(),
            )
        })?;
        value.set_sensitive(true);

        Ok(Self(value))
    }

    pub(crate) fn header_value(&self) -> &HeaderValue {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}
