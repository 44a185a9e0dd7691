use crate::interface_adapters::handlers::health::healthz;
use crate::interface_adapters::handlers::listings::{list_events, list_practice_locations};
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::get};
use std::sync::Arc;

pub fn app(state: Arc<AppState>) -> Router {
    // Wire the HTTP routes to their handlers.
    Router::new()
        .route("/healthz", get(healthz))
        .route("/events", get(list_events))
        .route("/practice/locations", get(list_practice_locations))
        .with_state(state)
}
