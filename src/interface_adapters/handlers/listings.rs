use crate::domain::ProviderPayload;
use crate::interface_adapters::protocol::ErrorResponse;
use crate::interface_adapters::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

#[tracing::instrument(name = "list_events", skip_all)]
pub async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ProviderPayload>, (StatusCode, Json<ErrorResponse>)> {
    // Forward the provider result untouched; any failure becomes a 502.
    let events = state.provider.list_events().await.map_err(|e| {
        tracing::error!(error = %e, "failed to list events.");
        error_response(StatusCode::BAD_GATEWAY, "failed to list events")
    })?;

    Ok(Json(events))
}

#[tracing::instrument(name = "list_practice_locations", skip_all)]
pub async fn list_practice_locations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ProviderPayload>, (StatusCode, Json<ErrorResponse>)> {
    let locations = state.provider.list_practice_locations().await.map_err(|e| {
        tracing::error!(error = %e, "failed to list practice locations.");
        error_response(StatusCode::BAD_GATEWAY, "failed to list practice locations")
    })?;

    Ok(Json(locations))
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
