//! Human-readable rendering of lookup results

use crate::search::{IncidentRecord, QueryResult};
use std::fmt;

/// Notice rendered when the index returned nothing
pub const NO_MATCH_NOTICE: &str = "❌ No matching incidents found in knowledge base.";

pub(crate) const RULE: &str =
    "======================================================================";

/// Report for one lookup: the best match in full, the rest abbreviated
///
/// Borrowing view over a [`QueryResult`]; rendering happens through `Display`.
#[derive(Debug, Clone, Copy)]
pub enum IncidentReport<'a> {
    NoMatch,
    Matches {
        query: &'a str,
        best_match: &'a IncidentRecord,
        others: &'a [IncidentRecord],
    },
}

impl<'a> IncidentReport<'a> {
    pub fn new(query: &'a str, result: &'a QueryResult) -> Self {
        match result.best_match() {
            None => IncidentReport::NoMatch,
            Some(best_match) => IncidentReport::Matches {
                query,
                best_match,
                others: result.others(),
            },
        }
    }

    /// Number of abbreviated entries under "other similar incidents"
    pub fn secondary_count(&self) -> usize {
        match self {
            IncidentReport::NoMatch => 0,
            IncidentReport::Matches { others, .. } => others.len(),
        }
    }
}

/// Render `result` for `query` as text
pub fn render(query: &str, result: &QueryResult) -> String {
    IncidentReport::new(query, result).to_string()
}

impl fmt::Display for IncidentReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (query, best, others) = match self {
            IncidentReport::NoMatch => return writeln!(f, "{}", NO_MATCH_NOTICE),
            IncidentReport::Matches {
                query,
                best_match,
                others,
            } => (query, best_match, others),
        };

        section(f, "🔍 INCIDENT ANALYSIS")?;
        writeln!(f, "\n📝 Your Issue: {}", query)?;

        writeln!(f)?;
        section(f, "✅ RECOMMENDED SOLUTION (Best Match)")?;
        writeln!(f, "\n📋 Ticket Reference: {}", best.ticket_id)?;
        writeln!(f, "📂 Service Category: {}", best.service_category)?;
        writeln!(f, "🔍 Root Cause: {}", best.root_cause)?;
        writeln!(f, "📖 KB Article: {}", best.kb_reference())?;

        writeln!(f, "\n💡 Resolution Steps:")?;
        indented(f, &best.resolution_steps)?;

        writeln!(f, "\n📄 Summary:")?;
        indented(f, &best.resolution_summary)?;

        if others.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        section(f, "📚 OTHER SIMILAR INCIDENTS:")?;
        for (rank, record) in others.iter().enumerate() {
            writeln!(f, "\n{}. {}", rank + 2, record.ticket_id)?;
            writeln!(f, "   Category: {}", record.service_category)?;
            writeln!(f, "   Root Cause: {}", record.root_cause)?;
            writeln!(f, "   KB: {}", record.kb_reference())?;
        }

        Ok(())
    }
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{}", RULE)?;
    writeln!(f, "{}", title)?;
    writeln!(f, "{}", RULE)
}

fn indented(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    if text.trim().is_empty() {
        return writeln!(f, "   (none recorded)");
    }
    for line in text.lines() {
        writeln!(f, "   {}", line.trim_end())?;
    }
    Ok(())
}
