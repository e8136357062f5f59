//! Single-page web form over the incident lookup
//!
//! One text field, one lookup per submission, best match only.

pub mod handlers;
pub mod page;
pub mod routes;

pub use routes::*;

use crate::search::IncidentSearch;
use std::sync::Arc;

/// Results fetched per form submission
pub const WEB_FORM_MAX_RESULTS: usize = 1;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<dyn IncidentSearch>,
}

impl AppState {
    pub fn new(search: Arc<dyn IncidentSearch>) -> Self {
        Self { search }
    }
}
