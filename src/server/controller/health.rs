use axum::Json;

use crate::model::health::HealthDto;

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness probe. Always answers `{"status":"ok"}` while the server is running.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is running", body = HealthDto)
    ),
)]
pub async fn health() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}
