//! Client for the hosted incident knowledge-base index
//!
//! Ranking, tokenization and storage all live in the remote search service.
//! This module only knows how to reach it and how to read its answers:
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐
//! │  CLI shell   │   │   Web form   │
//! └──────┬───────┘   └──────┬───────┘
//!        └────────┬─────────┘
//!                 ▼
//! ┌─────────────────────────────────────────────────┐
//! │  IncidentSearch (trait)                          │
//! │  - search()   - check_connectivity()            │
//! └─────────────────────────────────────────────────┘
//!                 │  POST /indexes/{index}/docs/search
//!                 ▼
//! ┌─────────────────────────────────────────────────┐
//! │  Hosted search service (endpoint, index, key)   │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use incident_resolver::search::{Credential, IncidentSearch, IncidentSearchClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credential = Credential::new(std::env::var("INCIDENT_SEARCH_API_KEY")?)?;
//!     let client = IncidentSearchClient::connect(
//!         "https://incidenthandling.search.windows.net",
//!         "incidents-kb",
//!         credential,
//!     )?;
//!
//!     let result = client.search("VPN keeps asking for password", 3).await?;
//!     if let Some(best) = result.best_match() {
//!         println!("{}: {}", best.ticket_id, best.root_cause);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod credential;
mod document;
mod error;
mod query;

pub use client::{
    ClientOptions, IncidentSearch, IncidentSearchClient, DEFAULT_API_VERSION, PROBE_QUERY,
};
pub use credential::Credential;
pub use document::{IncidentRecord, QueryResult, SELECT_FIELDS};
pub use error::{SearchError, SearchResult};
pub use query::{QueryRequest, DEFAULT_MAX_RESULTS};
