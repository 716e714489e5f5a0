//! Worker shift assignment domain models.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::{model::assignment::ShiftAssignmentDto, server::model::pagination::PageRequest};

/// Assignment joined with the assigned user and the shift.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftAssignment {
    pub id: i32,
    pub user_id: i32,
    pub shift_id: i32,
    pub assigned_at: DateTime<Utc>,
    pub assigned_by: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub shift_date: Option<NaiveDate>,
    pub shift_start_time: Option<NaiveTime>,
    pub shift_end_time: Option<NaiveTime>,
    pub shift_role_name: Option<String>,
}

impl ShiftAssignment {
    /// Converts an assignment row and its optionally loaded relations.
    pub fn from_entity(
        entity: entity::worker_shift_assignment::Model,
        user: Option<&entity::user::Model>,
        shift: Option<&entity::shift::Model>,
        role: Option<&entity::shift_role::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            shift_id: entity.shift_id,
            assigned_at: entity.assigned_at,
            assigned_by: entity.assigned_by,
            first_name: user.map(|u| u.first_name.clone()),
            last_name: user.map(|u| u.last_name.clone()),
            email: user.map(|u| u.email.clone()),
            shift_date: shift.map(|s| s.date),
            shift_start_time: shift.map(|s| s.start_time),
            shift_end_time: shift.map(|s| s.end_time),
            shift_role_name: role.map(|r| r.role_name.clone()),
        }
    }

    pub fn into_dto(self) -> ShiftAssignmentDto {
        ShiftAssignmentDto {
            id: self.id,
            user_id: self.user_id,
            shift_id: self.shift_id,
            assigned_at: self.assigned_at,
            assigned_by: self.assigned_by,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            shift_date: self.shift_date,
            shift_start_time: self.shift_start_time,
            shift_end_time: self.shift_end_time,
            shift_role_name: self.shift_role_name,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AssignmentFilter {
    pub user_id: Option<i32>,
    pub page: PageRequest,
}
