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
        api::{ApiResponse, ErrorDto},
        assignment::{AssignmentListQuery, ShiftAssignmentDto},
        shift_request::{
            CreateShiftRequestDto, RejectShiftRequestDto, ShiftRequestDto,
            ShiftRequestListItemDto, ShiftRequestListQuery,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            assignment::AssignmentFilter,
            pagination::PageRequest,
            shift_request::{status_from_dto, CreateShiftRequestParams, ShiftRequestFilter},
        },
        service::{assignment::AssignmentService, shift_request::ShiftRequestService},
        state::AppState,
    },
};

/// Tag for grouping shift request endpoints in OpenAPI documentation
pub static SHIFT_REQUEST_TAG: &str = "shift_request";

/// File a shift request.
///
/// Runs the admission rules (shift not assigned, no overlapping pending request,
/// no assignment that day, weekly cap) and stores a pending request.
///
/// # Access Control
/// - Authenticated - Workers file for themselves; admins may name any user
///
/// # Arguments
/// - `state` - Application state containing the database connection and weekly cap
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Target shift and optional target user
///
/// # Returns
/// - `201 Created` - Pending request created
/// - `400 Bad Request` - An admission rule failed or the body is invalid
/// - `401 Unauthorized` - Missing token, or a worker filing for someone else
/// - `404 Not Found` - Shift or named user not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/shift/request",
    tag = SHIFT_REQUEST_TAG,
    request_body = CreateShiftRequestDto,
    responses(
        (status = 201, description = "Pending request created", body = ApiResponse<ShiftRequestDto>),
        (status = 400, description = "Admission rule failed", body = ErrorDto),
        (status = 401, description = "Caller not authenticated or not allowed", body = ErrorDto),
        (status = 404, description = "Shift or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_shift_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateShiftRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).authenticate().await?;
    let Json(payload) = payload?;

    let service = ShiftRequestService::new(&state.db, state.max_shifts_per_week);

    let user_id = service.resolve_target(&caller, payload.user_id).await?;
    let params = CreateShiftRequestParams {
        user_id,
        shift_id: payload.shift_id,
        requested_by: caller.email,
    };

    let request = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(request.into_dto()))))
}

/// Get a page of shift requests.
///
/// Rows include the targeted shift's date, times and role. Workers only ever see
/// their own requests.
///
/// # Returns
/// - `200 OK` - Page of requests with pagination metadata
/// - `400 Bad Request` - Malformed query
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Named user not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/shift/request",
    tag = SHIFT_REQUEST_TAG,
    params(ShiftRequestListQuery),
    responses(
        (status = 200, description = "Page of shift requests", body = ApiResponse<Vec<ShiftRequestListItemDto>>),
        (status = 400, description = "Malformed query", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shift_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<ShiftRequestListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).authenticate().await?;
    let Query(query) = query?;

    let service = ShiftRequestService::new(&state.db, state.max_shifts_per_week);

    let filter = ShiftRequestFilter {
        status: query.status.map(status_from_dto),
        user_id: service.resolve_scope(&caller, query.user_id).await?,
        page: PageRequest::new(query.limit, query.offset),
    };

    let requests = service.list(filter).await?;

    Ok((
        StatusCode::OK,
        Json(requests.into_response(|item| item.into_dto())),
    ))
}

/// Approve a pending shift request.
///
/// Marks the request approved and assigns the shift to the requester in the same
/// transaction.
///
/// # Access Control
/// - `Admin` - Only admins can review requests
///
/// # Returns
/// - `200 OK` - Approved request
/// - `400 Bad Request` - Request not pending, or shift already assigned
/// - `401 Unauthorized` - Caller not authenticated or not an admin
/// - `404 Not Found` - Request not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/shift/request/{id}/approve",
    tag = SHIFT_REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Shift request ID")
    ),
    responses(
        (status = 200, description = "Approved request", body = ApiResponse<ShiftRequestDto>),
        (status = 400, description = "Request not pending or shift already assigned", body = ErrorDto),
        (status = 401, description = "Caller not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_shift_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;
    let Path(id) = id?;

    let request = ShiftRequestService::new(&state.db, state.max_shifts_per_week)
        .approve(id, admin.email)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(request.into_dto()))))
}

/// Reject a pending shift request with a reason.
///
/// # Access Control
/// - `Admin` - Only admins can review requests
///
/// # Returns
/// - `200 OK` - Rejected request
/// - `400 Bad Request` - Request not pending or body invalid
/// - `401 Unauthorized` - Caller not authenticated or not an admin
/// - `404 Not Found` - Request not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/shift/request/{id}/reject",
    tag = SHIFT_REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Shift request ID")
    ),
    request_body = RejectShiftRequestDto,
    responses(
        (status = 200, description = "Rejected request", body = ApiResponse<ShiftRequestDto>),
        (status = 400, description = "Request not pending", body = ErrorDto),
        (status = 401, description = "Caller not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_shift_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<RejectShiftRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;
    let Path(id) = id?;
    let Json(payload) = payload?;

    let request = ShiftRequestService::new(&state.db, state.max_shifts_per_week)
        .reject(id, payload.reason, admin.email)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(request.into_dto()))))
}

/// Get a page of shift assignments.
///
/// Rows include the assigned user's name and email and the shift's date, times and
/// role. Workers only ever see their own assignments.
///
/// # Returns
/// - `200 OK` - Page of assignments with pagination metadata
/// - `400 Bad Request` - Malformed query
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Named user not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/shift/assignment",
    tag = SHIFT_REQUEST_TAG,
    params(AssignmentListQuery),
    responses(
        (status = 200, description = "Page of assignments", body = ApiResponse<Vec<ShiftAssignmentDto>>),
        (status = 400, description = "Malformed query", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_assignments(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<AssignmentListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state, &headers).authenticate().await?;
    let Query(query) = query?;

    let filter = AssignmentFilter {
        user_id: ShiftRequestService::new(&state.db, state.max_shifts_per_week)
            .resolve_scope(&caller, query.user_id)
            .await?,
        page: PageRequest::new(query.limit, query.offset),
    };

    let assignments = AssignmentService::new(&state.db).list(filter).await?;

    Ok((
        StatusCode::OK,
        Json(assignments.into_response(|assignment| assignment.into_dto())),
    ))
}
