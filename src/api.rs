//! HTTP API endpoints.
//!
//! The game itself runs entirely over the WebSocket; this is the plain-HTTP
//! surface next to it, used by deploy platforms.

use axum::Json;
use serde::Serialize;

/// Response structure for the health probe
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}
