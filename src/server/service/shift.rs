//! Shift service for business logic.
//!
//! Admin-facing shift management: creation, lookup, listing, full updates and soft
//! deletion, plus the shift role lookup list.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{shift::ShiftRepository, shift_role::ShiftRoleRepository},
    error::{shift::ShiftError, AppError},
    model::{
        pagination::Paginated,
        shift::{CreateShiftParams, Shift, ShiftFilter, ShiftRole, UpdateShiftParams},
    },
    util::week::week_bounds,
};

pub struct ShiftService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShiftService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new active shift.
    ///
    /// # Returns
    /// - `Ok(Shift)` - The created shift with its role name
    /// - `Err(AppError::ShiftErr(InvalidTimeRange))` - Start is not before end
    /// - `Err(AppError::ShiftErr(DateOutOfRange))` - Date has no representable week
    /// - `Err(AppError::NotFound)` - Role does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateShiftParams) -> Result<Shift, AppError> {
        validate_times(params.start_time, params.end_time)?;
        validate_date(params.date)?;
        self.ensure_role_exists(params.role_id).await?;

        let shift = ShiftRepository::new(self.db).create(params).await?;

        tracing::info!("Created shift {} on {}", shift.id, shift.date);

        Ok(shift)
    }

    /// Gets a non-deleted shift.
    ///
    /// # Returns
    /// - `Ok(Shift)` - Shift found
    /// - `Err(AppError::NotFound)` - Shift absent or deleted
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get(&self, id: i32) -> Result<Shift, AppError> {
        ShiftRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Shift not found".to_string()))
    }

    pub async fn list(&self, filter: ShiftFilter) -> Result<Paginated<Shift>, AppError> {
        let (shifts, total) = ShiftRepository::new(self.db).get_paginated(filter).await?;
        Ok(Paginated::new(shifts, filter.page, total))
    }

    /// Overwrites every editable field of a shift.
    ///
    /// # Returns
    /// - `Ok(Shift)` - Updated shift
    /// - `Err(AppError::ShiftErr(InvalidTimeRange))` - Start is not before end
    /// - `Err(AppError::ShiftErr(DateOutOfRange))` - Date has no representable week
    /// - `Err(AppError::NotFound)` - Shift or role does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, params: UpdateShiftParams) -> Result<Shift, AppError> {
        validate_times(params.start_time, params.end_time)?;
        validate_date(params.date)?;
        self.ensure_role_exists(params.role_id).await?;

        let id = params.id;
        let shift = ShiftRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Shift not found".to_string()))?;

        tracing::info!("Updated shift {}", id);

        Ok(shift)
    }

    /// Soft deletes a shift.
    ///
    /// # Returns
    /// - `Ok(())` - Shift deleted
    /// - `Err(AppError::NotFound)` - Shift absent or already deleted
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, id: i32, actor: String) -> Result<(), AppError> {
        let deleted = ShiftRepository::new(self.db).soft_delete(id, actor).await?;

        if !deleted {
            return Err(AppError::NotFound("Shift not found".to_string()));
        }

        tracing::info!("Deleted shift {}", id);

        Ok(())
    }

    pub async fn list_roles(&self) -> Result<Vec<ShiftRole>, AppError> {
        Ok(ShiftRoleRepository::new(self.db).get_all().await?)
    }

    async fn ensure_role_exists(&self, role_id: i32) -> Result<(), AppError> {
        ShiftRoleRepository::new(self.db)
            .find_by_id(role_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Shift role not found".to_string()))
    }
}

fn validate_times(start: NaiveTime, end: NaiveTime) -> Result<(), ShiftError> {
    if start >= end {
        return Err(ShiftError::InvalidTimeRange);
    }
    Ok(())
}

/// Weekly limits are counted per calendar week, so the whole week must be representable.
fn validate_date(date: NaiveDate) -> Result<(), ShiftError> {
    week_bounds(date)
        .map(|_| ())
        .ok_or(ShiftError::DateOutOfRange)
}
