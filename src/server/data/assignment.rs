use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::assignment::{AssignmentFilter, ShiftAssignment};

pub struct AssignmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AssignmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Assigns a shift to a user
    ///
    /// # Arguments
    /// - `user_id`: Assigned worker
    /// - `shift_id`: Shift being assigned
    /// - `assigned_by`: Admin identity recorded in `assigned_by` and `created_by`
    ///
    /// # Returns
    /// - `Ok(Model)`: The created assignment
    /// - `Err(DbErr)`: Database error, including a unique violation when the shift
    ///   already has an active assignment
    pub async fn create(
        &self,
        user_id: i32,
        shift_id: i32,
        assigned_by: String,
    ) -> Result<entity::worker_shift_assignment::Model, DbErr> {
        let now = Utc::now();

        entity::worker_shift_assignment::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            shift_id: ActiveValue::Set(shift_id),
            assigned_at: ActiveValue::Set(now),
            assigned_by: ActiveValue::Set(assigned_by.clone()),
            created_at: ActiveValue::Set(now),
            created_by: ActiveValue::Set(assigned_by),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Checks whether the shift has any non-deleted assignment.
    pub async fn is_shift_assigned(&self, shift_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::WorkerShiftAssignment::find()
            .filter(entity::worker_shift_assignment::Column::ShiftId.eq(shift_id))
            .filter(entity::worker_shift_assignment::Column::DeletedAt.is_null())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether the user holds an active assignment on a non-deleted shift dated `date`.
    pub async fn user_has_assignment_on(&self, user_id: i32, date: NaiveDate) -> Result<bool, DbErr> {
        let count = entity::prelude::WorkerShiftAssignment::find()
            .inner_join(entity::prelude::Shift)
            .filter(entity::worker_shift_assignment::Column::UserId.eq(user_id))
            .filter(entity::worker_shift_assignment::Column::DeletedAt.is_null())
            .filter(entity::shift::Column::DeletedAt.is_null())
            .filter(entity::shift::Column::Date.eq(date))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a page of assignments joined with user, shift and role, newest first
    ///
    /// # Returns
    /// - `Ok((assignments, total))`: Assignments on the page and the total matching count
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(
        &self,
        filter: AssignmentFilter,
    ) -> Result<(Vec<ShiftAssignment>, u64), DbErr> {
        let mut query = entity::prelude::WorkerShiftAssignment::find()
            .filter(entity::worker_shift_assignment::Column::DeletedAt.is_null());

        if let Some(user_id) = filter.user_id {
            query = query.filter(entity::worker_shift_assignment::Column::UserId.eq(user_id));
        }

        let total = query.clone().count(self.db).await?;

        let assignments = query
            .order_by_desc(entity::worker_shift_assignment::Column::CreatedAt)
            .order_by_desc(entity::worker_shift_assignment::Column::Id)
            .limit(filter.page.limit)
            .offset(filter.page.offset)
            .all(self.db)
            .await?;

        if assignments.is_empty() {
            return Ok((Vec::new(), total));
        }

        let user_ids: Vec<i32> = assignments.iter().map(|a| a.user_id).collect();
        let shift_ids: Vec<i32> = assignments.iter().map(|a| a.shift_id).collect();

        let users: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        let shifts: HashMap<i32, entity::shift::Model> = entity::prelude::Shift::find()
            .filter(entity::shift::Column::Id.is_in(shift_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|shift| (shift.id, shift))
            .collect();

        let role_ids: Vec<i32> = shifts.values().map(|shift| shift.role_id).collect();
        let roles: HashMap<i32, entity::shift_role::Model> = if role_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::ShiftRole::find()
                .filter(entity::shift_role::Column::Id.is_in(role_ids))
                .filter(entity::shift_role::Column::DeletedAt.is_null())
                .all(self.db)
                .await?
                .into_iter()
                .map(|role| (role.id, role))
                .collect()
        };

        let assignments = assignments
            .into_iter()
            .map(|assignment| {
                let user = users.get(&assignment.user_id);
                let shift = shifts.get(&assignment.shift_id);
                let role = shift.and_then(|shift| roles.get(&shift.role_id));
                ShiftAssignment::from_entity(assignment, user, shift, role)
            })
            .collect();

        Ok((assignments, total))
    }
}
