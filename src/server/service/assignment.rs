//! Read access to worker shift assignments.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::assignment::AssignmentRepository,
    error::AppError,
    model::{
        assignment::{AssignmentFilter, ShiftAssignment},
        pagination::Paginated,
    },
};

pub struct AssignmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssignmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists assignments joined with user and shift details, newest first.
    ///
    /// # Arguments
    /// - `filter` - Optional user scope and page window
    ///
    /// # Returns
    /// - `Ok(Paginated<ShiftAssignment>)` - Page of assignments with totals
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list(
        &self,
        filter: AssignmentFilter,
    ) -> Result<Paginated<ShiftAssignment>, AppError> {
        let (items, total) = AssignmentRepository::new(self.db)
            .get_paginated(filter)
            .await?;
        Ok(Paginated::new(items, filter.page, total))
    }
}
