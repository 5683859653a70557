//! Route table

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::extractors::AppState;
use crate::handlers::tickets;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/projects/:project_id/tickets", post(tickets::create_ticket))
        .route(
            "/projects/:project_id/tickets/:ticket_id/toggle",
            post(tickets::toggle_complete),
        )
        .route(
            "/projects/:project_id/tickets/:ticket_id/hours",
            post(tickets::change_hours),
        )
        .route(
            "/projects/:project_id/tickets/:ticket_id/watch",
            post(tickets::toggle_watch),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
