use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, EmptyDto, ErrorDto},
        shift::{CreateShiftDto, ShiftDto, ShiftListQuery, ShiftRoleDto, UpdateShiftDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            pagination::PageRequest,
            shift::{CreateShiftParams, ShiftFilter, UpdateShiftParams},
        },
        service::shift::ShiftService,
        state::AppState,
    },
};

/// Tag for grouping shift endpoints in OpenAPI documentation
pub static SHIFT_TAG: &str = "shift";

/// Create a new shift.
///
/// Creates an active shift on a date for a role. The start time must be before the
/// end time and the role must exist.
///
/// # Access Control
/// - `Admin` - Only admins can create shifts
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Shift creation data
///
/// # Returns
/// - `201 Created` - Successfully created shift
/// - `400 Bad Request` - Invalid body or time range
/// - `401 Unauthorized` - Caller not authenticated or not an admin
/// - `404 Not Found` - Role does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/shift",
    tag = SHIFT_TAG,
    request_body = CreateShiftDto,
    responses(
        (status = 201, description = "Successfully created shift", body = ApiResponse<ShiftDto>),
        (status = 400, description = "Invalid shift data", body = ErrorDto),
        (status = 401, description = "Caller not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_shift(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateShiftDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;
    let Json(payload) = payload?;

    let params = CreateShiftParams::from_dto(payload, admin.email);
    let shift = ShiftService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(shift.into_dto()))))
}

/// Get a page of shifts.
///
/// Returns shifts newest first with their role names. With `show_only_unassigned`
/// set, shifts that already have an active assignment are omitted.
///
/// # Access Control
/// - `Admin` - Only admins can list shifts
///
/// # Returns
/// - `200 OK` - Page of shifts with pagination metadata
/// - `400 Bad Request` - Malformed query
/// - `401 Unauthorized` - Caller not authenticated or not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/shift",
    tag = SHIFT_TAG,
    params(ShiftListQuery),
    responses(
        (status = 200, description = "Page of shifts", body = ApiResponse<Vec<ShiftDto>>),
        (status = 400, description = "Malformed query", body = ErrorDto),
        (status = 401, description = "Caller not authenticated or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shifts(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<ShiftListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;
    let Query(query) = query?;

    let filter = ShiftFilter {
        only_unassigned: query.show_only_unassigned,
        page: PageRequest::new(query.limit, query.offset),
    };
    let shifts = ShiftService::new(&state.db).list(filter).await?;

    Ok((StatusCode::OK, Json(shifts.into_response(|shift| shift.into_dto()))))
}

/// Get a shift by ID.
///
/// # Access Control
/// - `Admin` - Only admins can view shifts
///
/// # Returns
/// - `200 OK` - The shift
/// - `401 Unauthorized` - Caller not authenticated or not an admin
/// - `404 Not Found` - Shift absent or deleted
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/shift/{id}",
    tag = SHIFT_TAG,
    params(
        ("id" = i32, Path, description = "Shift ID")
    ),
    responses(
        (status = 200, description = "The shift", body = ApiResponse<ShiftDto>),
        (status = 401, description = "Caller not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Shift not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shift(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;
    let Path(id) = id?;

    let shift = ShiftService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(shift.into_dto()))))
}

/// Update a shift.
///
/// Overwrites every editable field, including `is_active`, so a shift can be
/// deactivated or reactivated.
///
/// # Access Control
/// - `Admin` - Only admins can update shifts
///
/// # Returns
/// - `200 OK` - The updated shift
/// - `400 Bad Request` - Invalid body or time range
/// - `401 Unauthorized` - Caller not authenticated or not an admin
/// - `404 Not Found` - Shift or role not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/shift/{id}",
    tag = SHIFT_TAG,
    params(
        ("id" = i32, Path, description = "Shift ID")
    ),
    request_body = UpdateShiftDto,
    responses(
        (status = 200, description = "The updated shift", body = ApiResponse<ShiftDto>),
        (status = 400, description = "Invalid shift data", body = ErrorDto),
        (status = 401, description = "Caller not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Shift or role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_shift(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateShiftDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;
    let Path(id) = id?;
    let Json(payload) = payload?;

    let params = UpdateShiftParams::from_dto(id, payload, admin.email);
    let shift = ShiftService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(shift.into_dto()))))
}

/// Soft delete a shift.
///
/// # Access Control
/// - `Admin` - Only admins can delete shifts
///
/// # Returns
/// - `200 OK` - Shift deleted
/// - `401 Unauthorized` - Caller not authenticated or not an admin
/// - `404 Not Found` - Shift absent or already deleted
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/shift/{id}",
    tag = SHIFT_TAG,
    params(
        ("id" = i32, Path, description = "Shift ID")
    ),
    responses(
        (status = 200, description = "Shift deleted", body = ApiResponse<EmptyDto>),
        (status = 401, description = "Caller not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Shift not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_shift(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;
    let Path(id) = id?;

    ShiftService::new(&state.db).delete(id, admin.email).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(EmptyDto {}))))
}

/// List shift roles.
#[utoipa::path(
    get,
    path = "/api/v1/shift/role",
    tag = SHIFT_TAG,
    responses(
        (status = 200, description = "All shift roles", body = ApiResponse<Vec<ShiftRoleDto>>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shift_roles(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers).authenticate().await?;

    let roles = ShiftService::new(&state.db).list_roles().await?;
    let roles: Vec<ShiftRoleDto> = roles.into_iter().map(|role| role.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(roles))))
}
