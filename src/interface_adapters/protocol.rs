use serde::Serialize;

// Liveness payload for the health probe.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub ok: bool,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    // Human-readable error string, fixed per endpoint.
    pub error: String,
}
