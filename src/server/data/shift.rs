use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::shift::{CreateShiftParams, Shift, ShiftFilter, UpdateShiftParams};

pub struct ShiftRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShiftRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active shift
    ///
    /// # Arguments
    /// - `params`: Shift fields and the creating admin's identity
    ///
    /// # Returns
    /// - `Ok(Shift)`: The created shift with its role name
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateShiftParams) -> Result<Shift, DbErr> {
        let shift = entity::shift::ActiveModel {
            date: ActiveValue::Set(params.date),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            role_id: ActiveValue::Set(params.role_id),
            location: ActiveValue::Set(params.location),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            created_by: ActiveValue::Set(params.actor),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let role = entity::prelude::ShiftRole::find_by_id(shift.role_id)
            .one(self.db)
            .await?;

        Ok(Shift::from_entity(shift, role))
    }

    /// Gets a non-deleted shift by ID with its role
    ///
    /// # Returns
    /// - `Ok(Some(Shift))`: Shift found
    /// - `Ok(None)`: Shift absent or soft-deleted
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Shift>, DbErr> {
        let result = entity::prelude::Shift::find_by_id(id)
            .filter(entity::shift::Column::DeletedAt.is_null())
            .find_also_related(entity::prelude::ShiftRole)
            .one(self.db)
            .await?;

        Ok(result.map(|(shift, role)| Shift::from_entity(shift, role)))
    }

    /// Gets a page of shifts, newest first
    ///
    /// When `only_unassigned` is set, shifts with any non-deleted assignment are skipped.
    ///
    /// # Returns
    /// - `Ok((shifts, total))`: Shifts on the page and the total matching count
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(&self, filter: ShiftFilter) -> Result<(Vec<Shift>, u64), DbErr> {
        let mut query =
            entity::prelude::Shift::find().filter(entity::shift::Column::DeletedAt.is_null());

        if filter.only_unassigned {
            query = query.filter(
                entity::shift::Column::Id.not_in_subquery(
                    Query::select()
                        .column(entity::worker_shift_assignment::Column::ShiftId)
                        .from(entity::worker_shift_assignment::Entity)
                        .and_where(entity::worker_shift_assignment::Column::DeletedAt.is_null())
                        .to_owned(),
                ),
            );
        }

        let total = query.clone().count(self.db).await?;

        let shifts = query
            .find_also_related(entity::prelude::ShiftRole)
            .order_by_desc(entity::shift::Column::CreatedAt)
            .order_by_desc(entity::shift::Column::Id)
            .limit(filter.page.limit)
            .offset(filter.page.offset)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(shift, role)| Shift::from_entity(shift, role))
            .collect();

        Ok((shifts, total))
    }

    /// Overwrites every editable field of a non-deleted shift
    ///
    /// # Returns
    /// - `Ok(Some(Shift))`: The updated shift
    /// - `Ok(None)`: Shift absent or soft-deleted
    /// - `Err(DbErr)`: Database error
    pub async fn update(&self, params: UpdateShiftParams) -> Result<Option<Shift>, DbErr> {
        let Some(shift) = entity::prelude::Shift::find_by_id(params.id)
            .filter(entity::shift::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::shift::ActiveModel = shift.into();
        active_model.date = ActiveValue::Set(params.date);
        active_model.start_time = ActiveValue::Set(params.start_time);
        active_model.end_time = ActiveValue::Set(params.end_time);
        active_model.role_id = ActiveValue::Set(params.role_id);
        active_model.location = ActiveValue::Set(params.location);
        active_model.is_active = ActiveValue::Set(params.is_active);
        active_model.updated_at = ActiveValue::Set(Some(Utc::now()));
        active_model.updated_by = ActiveValue::Set(Some(params.actor));

        let shift = active_model.update(self.db).await?;
        let role = entity::prelude::ShiftRole::find_by_id(shift.role_id)
            .one(self.db)
            .await?;

        Ok(Some(Shift::from_entity(shift, role)))
    }

    /// Soft deletes a shift, recording who deleted it
    ///
    /// # Returns
    /// - `Ok(true)`: Shift was deleted
    /// - `Ok(false)`: Shift absent or already deleted
    /// - `Err(DbErr)`: Database error
    pub async fn soft_delete(&self, id: i32, actor: String) -> Result<bool, DbErr> {
        let result = entity::prelude::Shift::update_many()
            .col_expr(entity::shift::Column::DeletedAt, Expr::value(Utc::now()))
            .col_expr(entity::shift::Column::DeletedBy, Expr::value(actor))
            .filter(entity::shift::Column::Id.eq(id))
            .filter(entity::shift::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
