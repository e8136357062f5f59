//! Incident records as returned by the search service

use serde::{Deserialize, Deserializer, Serialize};

/// Fields requested from the index on every query
pub const SELECT_FIELDS: [&str; 7] = [
    "ticket_id",
    "description",
    "service_category",
    "root_cause",
    "resolution_steps",
    "resolution_summary",
    "kb_article_id",
];

/// A past incident ticket stored in the knowledge-base index
///
/// Records are produced only by the remote service; this crate never builds or
/// mutates one outside of tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentRecord {
    /// Ticket identifier, e.g. `INC1001`
    pub ticket_id: String,

    /// Original issue description
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    /// Service category label
    #[serde(default, deserialize_with = "null_as_empty")]
    pub service_category: String,

    /// Recorded root cause
    #[serde(default, deserialize_with = "null_as_empty")]
    pub root_cause: String,

    /// Resolution steps, possibly multi-line
    #[serde(default, deserialize_with = "null_as_empty")]
    pub resolution_steps: String,

    /// Short restatement of the resolution
    #[serde(default, deserialize_with = "null_as_empty")]
    pub resolution_summary: String,

    /// Knowledge-base article reference
    #[serde(default)]
    pub kb_article_id: Option<String>,

    /// Relevance score assigned by the service
    #[serde(rename = "@search.score", default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl IncidentRecord {
    /// KB reference for display, `N/A` when the ticket has none
    pub fn kb_reference(&self) -> &str {
        match self.kb_article_id.as_deref() {
            Some(kb) if !kb.trim().is_empty() => kb,
            _ => "N/A",
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ranked records for one query, most relevant first
///
/// Order is the service's ranking; nothing here sorts or deduplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QueryResult {
    records: Vec<IncidentRecord>,
}

impl QueryResult {
    pub fn new(records: Vec<IncidentRecord>) -> Self {
        Self { records }
    }

    /// First record, if any
    pub fn best_match(&self) -> Option<&IncidentRecord> {
        self.records.first()
    }

    /// Records after the best match
    pub fn others(&self) -> &[IncidentRecord] {
        self.records.get(1..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IncidentRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<IncidentRecord> {
        self.records
    }
}

impl From<Vec<IncidentRecord>> for QueryResult {
    fn from(records: Vec<IncidentRecord>) -> Self {
        Self::new(records)
    }
}
