use crate::interface_adapters::protocol::HealthStatus;
use axum::Json;

pub async fn healthz() -> Json<HealthStatus> {
    Json(HealthStatus { ok: true })
}
