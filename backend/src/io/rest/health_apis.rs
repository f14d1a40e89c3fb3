//! Liveness endpoint with a process memory snapshot.

use axum::Json;
use chrono::Utc;
use shared::HealthResponse;

use crate::utils::MemorySnapshot;

/// Axum handler function for GET /examples/health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        memory_usage: MemorySnapshot::capture().to_usage(),
    })
}
