use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        auth::{CurrentUserDto, LoginDto, RegisterDto, TokenDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::auth::{LoginParams, RegisterParams},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a worker account.
///
/// Creates a user with the `WORKER` role and returns a signed token for it.
///
/// # Arguments
/// - `state` - Application state containing the database connection and token service
/// - `payload` - Registration fields
///
/// # Returns
/// - `201 Created` - Account created, token returned
/// - `400 Bad Request` - Blank field, malformed email, or email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<TokenDto>),
        (status = 400, description = "Invalid input or duplicate user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let token = AuthService::new(&state.db, &state.tokens)
        .register(RegisterParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(TokenDto { token }))))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Credentials valid, token returned
/// - `400 Bad Request` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = ApiResponse<TokenDto>),
        (status = 400, description = "Invalid Email/Password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let token = AuthService::new(&state.db, &state.tokens)
        .login(LoginParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(TokenDto { token }))))
}

/// Get the identity behind the caller's bearer token.
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current identity", body = ApiResponse<CurrentUserDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).authenticate().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(user.into_dto()))))
}
