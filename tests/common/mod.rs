//! Common test utilities: an in-memory search backend and record builders

#![allow(dead_code)]

use async_trait::async_trait;
use incident_resolver::search::{
    IncidentRecord, IncidentSearch, QueryRequest, QueryResult, SearchError, SearchResult,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory stand-in for the hosted index
///
/// Answers by exact description and records every request it receives.
#[derive(Default)]
pub struct FakeSearch {
    pub reachable: bool,
    pub failing: bool,
    records: HashMap<String, Vec<IncidentRecord>>,
    calls: Mutex<Vec<(String, usize)>>,
}

impl FakeSearch {
    pub fn reachable() -> Self {
        Self {
            reachable: true,
            ..Default::default()
        }
    }

    pub fn unreachable() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            reachable: true,
            failing: true,
            ..Default::default()
        }
    }

    pub fn with_records(mut self, description: &str, records: Vec<IncidentRecord>) -> Self {
        self.records.insert(description.to_string(), records);
        self
    }

    /// `(description, max_results)` of every request, in order
    pub fn calls(&self) -> Vec<(String, usize)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl IncidentSearch for FakeSearch {
    async fn execute(&self, request: &QueryRequest) -> SearchResult<QueryResult> {
        self.calls
            .lock()
            .unwrap()
            .push((request.description().to_string(), request.max_results()));

        if self.failing {
            return Err(SearchError::ServiceError {
                status: 503,
                message: "index offline".to_string(),
            });
        }

        let mut records = self
            .records
            .get(request.description())
            .cloned()
            .unwrap_or_default();
        records.truncate(request.max_results());
        Ok(QueryResult::new(records))
    }

    async fn check_connectivity(&self) -> bool {
        self.reachable
    }
}

pub fn incident(ticket_id: &str, category: &str, kb: Option<&str>) -> IncidentRecord {
    IncidentRecord {
        ticket_id: ticket_id.to_string(),
        description: format!("Original report for {}", ticket_id),
        service_category: category.to_string(),
        root_cause: format!("Root cause of {}", ticket_id),
        resolution_steps: format!("Resolution steps for {}", ticket_id),
        resolution_summary: format!("Summary for {}", ticket_id),
        kb_article_id: kb.map(str::to_string),
        score: None,
    }
}
