//! Shift request domain models and parameters.
//!
//! A shift request is a worker's claim on a shift. It starts `Pending` and moves
//! once, to `Approved` or `Rejected`, through an admin review.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use entity::shift_request::ShiftRequestStatus;

use crate::{
    model::shift_request::{ShiftRequestDto, ShiftRequestListItemDto, ShiftRequestStatusDto},
    server::model::pagination::PageRequest,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ShiftRequest {
    pub id: i32,
    pub user_id: i32,
    pub shift_id: i32,
    pub status: ShiftRequestStatus,
    pub requested_by: String,
    pub admin_actor: Option<String>,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

impl ShiftRequest {
    pub fn from_entity(entity: entity::shift_request::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            shift_id: entity.shift_id,
            status: entity.status,
            requested_by: entity.requested_by,
            admin_actor: entity.admin_actor,
            rejection_reason: entity.rejection_reason,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            updated_by: entity.updated_by,
        }
    }

    pub fn into_dto(self) -> ShiftRequestDto {
        ShiftRequestDto {
            id: self.id,
            user_id: self.user_id,
            shift_id: self.shift_id,
            status: status_into_dto(self.status),
            requested_by: self.requested_by,
            admin_actor: self.admin_actor,
            rejection_reason: self.rejection_reason,
            created_at: self.created_at,
            updated_at: self.updated_at,
            updated_by: self.updated_by,
        }
    }
}

/// Shift request joined with the shift it targets.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftRequestListItem {
    pub request: ShiftRequest,
    pub shift_date: Option<NaiveDate>,
    pub shift_start_time: Option<NaiveTime>,
    pub shift_end_time: Option<NaiveTime>,
    pub shift_role_id: Option<i32>,
    pub shift_role_name: Option<String>,
}

impl ShiftRequestListItem {
    pub fn into_dto(self) -> ShiftRequestListItemDto {
        let request = self.request;
        ShiftRequestListItemDto {
            id: request.id,
            user_id: request.user_id,
            shift_id: request.shift_id,
            status: status_into_dto(request.status),
            requested_by: request.requested_by,
            admin_actor: request.admin_actor,
            rejection_reason: request.rejection_reason,
            created_at: request.created_at,
            shift_date: self.shift_date,
            shift_start_time: self.shift_start_time,
            shift_end_time: self.shift_end_time,
            shift_role_id: self.shift_role_id,
            shift_role_name: self.shift_role_name,
        }
    }
}

pub fn status_into_dto(status: ShiftRequestStatus) -> ShiftRequestStatusDto {
    match status {
        ShiftRequestStatus::Pending => ShiftRequestStatusDto::Pending,
        ShiftRequestStatus::Approved => ShiftRequestStatusDto::Approved,
        ShiftRequestStatus::Rejected => ShiftRequestStatusDto::Rejected,
    }
}

pub fn status_from_dto(status: ShiftRequestStatusDto) -> ShiftRequestStatus {
    match status {
        ShiftRequestStatusDto::Pending => ShiftRequestStatus::Pending,
        ShiftRequestStatusDto::Approved => ShiftRequestStatus::Approved,
        ShiftRequestStatusDto::Rejected => ShiftRequestStatus::Rejected,
    }
}

/// Parameters for filing a new request.
#[derive(Debug, Clone)]
pub struct CreateShiftRequestParams {
    pub user_id: i32,
    pub shift_id: i32,
    /// Requester identity recorded in `requested_by` and `created_by`.
    pub requested_by: String,
}

/// Admin decision applied to a pending request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject { reason: String },
}

impl ReviewDecision {
    pub fn status(&self) -> ShiftRequestStatus {
        match self {
            Self::Approve => ShiftRequestStatus::Approved,
            Self::Reject { .. } => ShiftRequestStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReviewShiftRequestParams {
    pub request_id: i32,
    pub decision: ReviewDecision,
    /// Admin identity recorded in `admin_actor` and `updated_by`.
    pub admin: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftRequestFilter {
    pub status: Option<ShiftRequestStatus>,
    pub user_id: Option<i32>,
    pub page: PageRequest,
}
