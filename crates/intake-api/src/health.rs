use axum::Json;

use intake_types::api::HealthResponse;

/// GET / — liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Server is running".to_owned(),
    })
}
