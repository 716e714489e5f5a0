use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        user::WorkerDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all workers.
///
/// Returns every non-deleted user with the `WORKER` role, newest first. Any
/// authenticated caller may list workers.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - Worker list
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/user/worker",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Worker list", body = ApiResponse<Vec<WorkerDto>>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_workers(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers).authenticate().await?;

    let workers = UserService::new(&state.db).get_workers().await?;
    let workers: Vec<WorkerDto> = workers.into_iter().map(|user| user.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(workers))))
}
