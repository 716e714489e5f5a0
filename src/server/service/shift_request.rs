//! Shift request workflow.
//!
//! Filing a request runs the admission rules in order inside one transaction:
//!
//! 1. The shift must exist and not be soft-deleted
//! 2. The shift must not already be assigned
//! 3. The requester must have no pending request overlapping the shift's window
//! 4. The requester must have no assignment on the shift's date
//! 5. The requester must be under the weekly cap of approved requests
//!
//! Approval and rejection only apply to pending requests. Approval also writes the
//! assignment in the same transaction, and the store's unique index on active
//! assignments is the final guard against double-booking.

use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::{
        assignment::AssignmentRepository, shift::ShiftRepository,
        shift_request::ShiftRequestRepository,
    },
    error::{auth::AuthError, shift::ShiftError, AppError},
    model::{
        auth::{AuthMethod, AuthUser},
        pagination::Paginated,
        shift_request::{
            CreateShiftRequestParams, ReviewDecision, ReviewShiftRequestParams, ShiftRequest,
            ShiftRequestFilter, ShiftRequestListItem,
        },
    },
    service::user::UserService,
    util::week::week_bounds,
};

pub struct ShiftRequestService<'a> {
    db: &'a DatabaseConnection,
    max_shifts_per_week: u64,
}

impl<'a> ShiftRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection, max_shifts_per_week: u64) -> Self {
        Self {
            db,
            max_shifts_per_week,
        }
    }

    /// Resolves the user a new request is filed for.
    ///
    /// Workers may only file for themselves. Admins may file for any existing user; the
    /// static admin identity has no user row and must name one.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the user the request is filed for
    /// - `Err(AppError::AuthErr(AccessDenied))` - Worker naming another user
    /// - `Err(AppError::NotFound)` - Admin naming a user that does not exist
    /// - `Err(AppError::BadRequest)` - Static admin without a user id
    pub async fn resolve_target(
        &self,
        caller: &AuthUser,
        user_id: Option<i32>,
    ) -> Result<i32, AppError> {
        if !caller.is_admin() {
            return match user_id {
                Some(user_id) if user_id != caller.id => Err(AuthError::AccessDenied(
                    caller.email.clone(),
                    format!("User attempted to file a shift request for user {}", user_id),
                )
                .into()),
                _ => Ok(caller.id),
            };
        }

        match user_id {
            Some(user_id) => Ok(UserService::new(self.db).get_by_id(user_id).await?.id),
            None if caller.method == AuthMethod::StaticAdminToken => Err(AppError::BadRequest(
                "user_id is required when using the static admin token".to_string(),
            )),
            None => Ok(caller.id),
        }
    }

    /// Resolves whose requests or assignments a list call may see.
    ///
    /// Workers always see only their own rows. Admins see everything unless they name
    /// a user, who must exist.
    ///
    /// # Returns
    /// - `Ok(Some(id))` - List restricted to one user
    /// - `Ok(None)` - Unrestricted admin list
    /// - `Err(AppError::NotFound)` - Admin naming a user that does not exist
    pub async fn resolve_scope(
        &self,
        caller: &AuthUser,
        user_id: Option<i32>,
    ) -> Result<Option<i32>, AppError> {
        if !caller.is_admin() {
            return Ok(Some(caller.id));
        }

        match user_id {
            Some(user_id) => Ok(Some(UserService::new(self.db).get_by_id(user_id).await?.id)),
            None => Ok(None),
        }
    }

    /// Files a pending request after running every admission rule.
    ///
    /// # Arguments
    /// - `params` - Target user (already resolved and authorized), shift and requester
    ///
    /// # Returns
    /// - `Ok(ShiftRequest)` - The created pending request
    /// - `Err(AppError::NotFound)` - Shift absent or deleted
    /// - `Err(AppError::ShiftErr(_))` - An admission rule failed
    /// - `Err(AppError::DbErr)` - Database error; nothing was written
    pub async fn create(&self, params: CreateShiftRequestParams) -> Result<ShiftRequest, AppError> {
        let txn = self.db.begin().await?;

        let shift = ShiftRepository::new(&txn)
            .find_by_id(params.shift_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Shift not found".to_string()))?;

        let assignment_repo = AssignmentRepository::new(&txn);
        let request_repo = ShiftRequestRepository::new(&txn);

        if assignment_repo.is_shift_assigned(shift.id).await? {
            tracing::info!(
                "Rejected request from user {} for shift {}: already assigned",
                params.user_id,
                shift.id
            );
            return Err(ShiftError::AlreadyAssigned.into());
        }

        if request_repo
            .has_overlapping_pending(params.user_id, shift.date, shift.start_time, shift.end_time)
            .await?
        {
            tracing::info!(
                "Rejected request from user {} for shift {}: overlaps a pending request",
                params.user_id,
                shift.id
            );
            return Err(ShiftError::TimeOverlap.into());
        }

        if assignment_repo
            .user_has_assignment_on(params.user_id, shift.date)
            .await?
        {
            tracing::info!(
                "Rejected request from user {} for shift {}: already assigned on {}",
                params.user_id,
                shift.id,
                shift.date
            );
            return Err(ShiftError::AlreadyAssignedOnDate.into());
        }

        let (monday, sunday) = week_bounds(shift.date).ok_or_else(|| {
            AppError::InternalError(format!(
                "Shift {} date {} has no representable week",
                shift.id, shift.date
            ))
        })?;
        let approved = request_repo
            .count_approved_between(params.user_id, monday, sunday)
            .await?;
        if approved >= self.max_shifts_per_week {
            tracing::info!(
                "Rejected request from user {} for shift {}: {} approved in week of {}",
                params.user_id,
                shift.id,
                approved,
                monday
            );
            return Err(ShiftError::WeeklyLimitReached {
                limit: self.max_shifts_per_week,
            }
            .into());
        }

        let request = request_repo.create(params).await?;
        txn.commit().await?;

        tracing::info!(
            "User {} requested shift {} (request {})",
            request.user_id,
            request.shift_id,
            request.id
        );

        Ok(request)
    }

    /// Applies an admin decision to a pending request.
    ///
    /// Approval inserts the assignment in the same transaction as the status change.
    ///
    /// # Returns
    /// - `Ok(ShiftRequest)` - The request in its new state
    /// - `Err(AppError::NotFound)` - Request absent or deleted
    /// - `Err(AppError::ShiftErr(NotPending))` - Request was already reviewed
    /// - `Err(AppError::ShiftErr(AlreadyAssigned))` - Shift gained an assignment first
    /// - `Err(AppError::DbErr)` - Database error; nothing was written
    pub async fn review(&self, params: ReviewShiftRequestParams) -> Result<ShiftRequest, AppError> {
        let txn = self.db.begin().await?;
        let request_repo = ShiftRequestRepository::new(&txn);

        let request = request_repo
            .find_by_id(params.request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Shift request not found".to_string()))?;

        if request.status != entity::shift_request::ShiftRequestStatus::Pending {
            return Err(ShiftError::NotPending.into());
        }

        let updated = request_repo
            .review(request.id, &params.decision, &params.admin)
            .await?;
        if updated == 0 {
            return Err(ShiftError::NotPending.into());
        }

        if params.decision == ReviewDecision::Approve {
            AssignmentRepository::new(&txn)
                .create(request.user_id, request.shift_id, params.admin.clone())
                .await
                .map_err(map_assignment_conflict)?;
        }

        let request = request_repo
            .find_by_id(request.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Shift request not found".to_string()))?;
        txn.commit().await?;

        tracing::info!(
            "{} set request {} to {:?}",
            params.admin,
            request.id,
            request.status
        );

        Ok(request)
    }

    pub async fn approve(&self, request_id: i32, admin: String) -> Result<ShiftRequest, AppError> {
        self.review(ReviewShiftRequestParams {
            request_id,
            decision: ReviewDecision::Approve,
            admin,
        })
        .await
    }

    pub async fn reject(
        &self,
        request_id: i32,
        reason: String,
        admin: String,
    ) -> Result<ShiftRequest, AppError> {
        self.review(ReviewShiftRequestParams {
            request_id,
            decision: ReviewDecision::Reject { reason },
            admin,
        })
        .await
    }

    pub async fn list(
        &self,
        filter: ShiftRequestFilter,
    ) -> Result<Paginated<ShiftRequestListItem>, AppError> {
        let (items, total) = ShiftRequestRepository::new(self.db)
            .get_paginated(filter)
            .await?;
        Ok(Paginated::new(items, filter.page, total))
    }
}

fn map_assignment_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ShiftError::AlreadyAssigned.into(),
        _ => err.into(),
    }
}
