//! Shift domain models and parameters.
//!
//! A shift is a schedulable work slot on a single date, tied to a shift role.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::{
    model::shift::{CreateShiftDto, ShiftDto, ShiftRoleDto, UpdateShiftDto},
    server::model::pagination::PageRequest,
};

/// Shift with its role name resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Shift {
    pub id: i32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub role_id: i32,
    /// `None` when the role row is missing or soft-deleted.
    pub role_name: Option<String>,
    pub location: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

impl Shift {
    /// Converts entity models at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - Shift row
    /// - `role` - Related role row if it could be loaded
    pub fn from_entity(
        entity: entity::shift::Model,
        role: Option<entity::shift_role::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            date: entity.date,
            start_time: entity.start_time,
            end_time: entity.end_time,
            role_id: entity.role_id,
            role_name: role
                .filter(|role| role.deleted_at.is_none())
                .map(|role| role.role_name),
            location: entity.location,
            is_active: entity.is_active,
            created_at: entity.created_at,
            created_by: entity.created_by,
            updated_at: entity.updated_at,
            updated_by: entity.updated_by,
        }
    }

    pub fn into_dto(self) -> ShiftDto {
        ShiftDto {
            id: self.id,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            role_id: self.role_id,
            role_name: self.role_name,
            location: self.location,
            is_active: self.is_active,
            created_at: self.created_at,
            created_by: self.created_by,
            updated_at: self.updated_at,
            updated_by: self.updated_by,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShiftRole {
    pub id: i32,
    pub role_name: String,
}

impl ShiftRole {
    pub fn from_entity(entity: entity::shift_role::Model) -> Self {
        Self {
            id: entity.id,
            role_name: entity.role_name,
        }
    }

    pub fn into_dto(self) -> ShiftRoleDto {
        ShiftRoleDto {
            id: self.id,
            role_name: self.role_name,
        }
    }
}

/// Parameters for creating a shift. New shifts are always active.
#[derive(Debug, Clone)]
pub struct CreateShiftParams {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub role_id: i32,
    pub location: Option<String>,
    /// Admin identity recorded in `created_by`.
    pub actor: String,
}

impl CreateShiftParams {
    pub fn from_dto(dto: CreateShiftDto, actor: String) -> Self {
        Self {
            date: dto.date,
            start_time: dto.start_time,
            end_time: dto.end_time,
            role_id: dto.role_id,
            location: dto.location,
            actor,
        }
    }
}

/// Parameters overwriting every editable field of a shift.
#[derive(Debug, Clone)]
pub struct UpdateShiftParams {
    pub id: i32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub role_id: i32,
    pub location: Option<String>,
    pub is_active: bool,
    /// Admin identity recorded in `updated_by`.
    pub actor: String,
}

impl UpdateShiftParams {
    pub fn from_dto(id: i32, dto: UpdateShiftDto, actor: String) -> Self {
        Self {
            id,
            date: dto.date,
            start_time: dto.start_time,
            end_time: dto.end_time,
            role_id: dto.role_id,
            location: dto.location,
            is_active: dto.is_active,
            actor,
        }
    }
}

/// Filter for the shift list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftFilter {
    /// Only shifts with no non-deleted assignment.
    pub only_unassigned: bool,
    pub page: PageRequest,
}
