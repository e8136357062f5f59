//! HTML for the lookup form

use crate::search::IncidentRecord;
use std::fmt::Write;

/// What the page shows under the form
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    /// Nothing submitted yet
    Blank,
    Found(IncidentRecord),
    NotFound,
    /// The lookup could not be completed
    Failed,
}

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
input[type=text]{width:100%;padding:.5rem;font-size:1rem}\
.panel{margin-top:1.5rem;padding:1rem;border-radius:.5rem}\
.success{background:#e8f5e9;border:1px solid #66bb6a}\
.error{background:#ffebee;border:1px solid #ef5350}\
pre{white-space:pre-wrap;font-family:inherit}";

/// Render the full page for `query` and `outcome`
pub fn render(query: Option<&str>, outcome: &FormOutcome) -> String {
    let mut html = String::with_capacity(2048);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>AIOps Incident Resolver</title>\n");
    let _ = writeln!(html, "<style>{}</style>", STYLE);
    html.push_str("</head>\n<body>\n<h1>🤖 AIOps Incident Resolver</h1>\n");

    let _ = writeln!(
        html,
        "<form method=\"post\" action=\"/\">\n<label for=\"q\">Describe your issue:</label>\n\
         <input type=\"text\" id=\"q\" name=\"q\" value=\"{}\" autofocus>\n</form>",
        escape_html(query.unwrap_or_default())
    );

    match outcome {
        FormOutcome::Blank => {}
        FormOutcome::Found(record) => {
            html.push_str("<div class=\"panel success\" id=\"solution\">\n<h2>✅ Solution Found</h2>\n");
            field(&mut html, "Category", &record.service_category);
            field(&mut html, "Root Cause", &record.root_cause);
            let _ = writeln!(
                html,
                "<p><strong>Resolution:</strong></p>\n<pre>{}</pre>",
                escape_html(&record.resolution_steps)
            );
            field(&mut html, "KB", record.kb_reference());
            field(&mut html, "Ticket", &record.ticket_id);
            html.push_str("</div>\n");
        }
        FormOutcome::NotFound => {
            html.push_str("<div class=\"panel error\" id=\"no-solution\">No solution found</div>\n");
        }
        FormOutcome::Failed => {
            html.push_str(
                "<div class=\"panel error\" id=\"lookup-failed\">\
                 The incident knowledge base could not be reached. Please try again later.</div>\n",
            );
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn field(html: &mut String, label: &str, value: &str) {
    let _ = writeln!(html, "<p><strong>{}:</strong> {}</p>", label, escape_html(value));
}

/// Escape text for use in element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
