use crate::web::{handlers, AppState};
use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

/// Build the web form router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Form page
        .route("/", get(handlers::form_page).post(handlers::submit_form))
        // Health endpoint
        .route("/health", get(handlers::health_check))
        // JSON lookup
        .route("/v1/incidents/search", get(handlers::search_incidents))
        // Add state
        .with_state(state)
        // Add middleware
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_response(DefaultOnResponse::new()),
        )
        .layer(CorsLayer::permissive())
}
