use crate::error::Result;
use crate::search::{IncidentRecord, DEFAULT_MAX_RESULTS};
use crate::web::page::{self, FormOutcome};
use crate::web::{AppState, WEB_FORM_MAX_RESULTS};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Form field carrying the issue description
#[derive(Debug, Default, Deserialize)]
pub struct LookupForm {
    #[serde(default)]
    pub q: String,
}

/// Render the form; `?q=` performs a lookup
pub async fn form_page(
    State(state): State<AppState>,
    Query(form): Query<LookupForm>,
) -> Response {
    lookup_page(&state, &form.q).await
}

/// Handle a form submission
pub async fn submit_form(State(state): State<AppState>, Form(form): Form<LookupForm>) -> Response {
    lookup_page(&state, &form.q).await
}

async fn lookup_page(state: &AppState, query: &str) -> Response {
    let query = query.trim();
    if query.is_empty() {
        return Html(page::render(None, &FormOutcome::Blank)).into_response();
    }

    let outcome = match state.search.search(query, WEB_FORM_MAX_RESULTS).await {
        Ok(result) => match result.into_records().into_iter().next() {
            Some(record) => FormOutcome::Found(record),
            None => FormOutcome::NotFound,
        },
        Err(e) => {
            warn!(error = %e, "Web form lookup failed");
            FormOutcome::Failed
        }
    };

    let status = match outcome {
        FormOutcome::Failed => StatusCode::BAD_GATEWAY,
        _ => StatusCode::OK,
    };

    (status, Html(page::render(Some(query), &outcome))).into_response()
}

/// Health check endpoint
pub async fn health_check() -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_top")]
    pub top: usize,
}

fn default_top() -> usize {
    DEFAULT_MAX_RESULTS
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub results: Vec<IncidentRecord>,
}

/// JSON lookup: `GET /v1/incidents/search?q=...&top=3`
pub async fn search_incidents(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    let result = state.search.search(&params.q, params.top).await?;

    Ok(Json(SearchResponse {
        query: params.q.trim().to_string(),
        count: result.len(),
        results: result.into_records(),
    }))
}
