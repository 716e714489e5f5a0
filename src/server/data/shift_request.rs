use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime, Utc};
use entity::shift_request::ShiftRequestStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::shift_request::{
    CreateShiftRequestParams, ReviewDecision, ShiftRequest, ShiftRequestFilter,
    ShiftRequestListItem,
};

pub struct ShiftRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShiftRequestRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a pending request
    ///
    /// # Arguments
    /// - `params`: Target user, target shift and requester identity
    ///
    /// # Returns
    /// - `Ok(ShiftRequest)`: The created request
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateShiftRequestParams) -> Result<ShiftRequest, DbErr> {
        let request = entity::shift_request::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            shift_id: ActiveValue::Set(params.shift_id),
            status: ActiveValue::Set(ShiftRequestStatus::Pending),
            requested_by: ActiveValue::Set(params.requested_by.clone()),
            created_at: ActiveValue::Set(Utc::now()),
            created_by: ActiveValue::Set(params.requested_by),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ShiftRequest::from_entity(request))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ShiftRequest>, DbErr> {
        let request = entity::prelude::ShiftRequest::find_by_id(id)
            .filter(entity::shift_request::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(request.map(ShiftRequest::from_entity))
    }

    /// Gets a page of requests joined with their shift and role, newest first
    ///
    /// # Returns
    /// - `Ok((items, total))`: Requests on the page and the total matching count
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(
        &self,
        filter: ShiftRequestFilter,
    ) -> Result<(Vec<ShiftRequestListItem>, u64), DbErr> {
        let mut query = entity::prelude::ShiftRequest::find()
            .filter(entity::shift_request::Column::DeletedAt.is_null());

        if let Some(status) = filter.status {
            query = query.filter(entity::shift_request::Column::Status.eq(status));
        }
        if let Some(user_id) = filter.user_id {
            query = query.filter(entity::shift_request::Column::UserId.eq(user_id));
        }

        let total = query.clone().count(self.db).await?;

        let rows = query
            .find_also_related(entity::prelude::Shift)
            .order_by_desc(entity::shift_request::Column::CreatedAt)
            .order_by_desc(entity::shift_request::Column::Id)
            .limit(filter.page.limit)
            .offset(filter.page.offset)
            .all(self.db)
            .await?;

        let role_ids: Vec<i32> = rows
            .iter()
            .filter_map(|(_, shift)| shift.as_ref().map(|shift| shift.role_id))
            .collect();

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

        let items = rows
            .into_iter()
            .map(|(request, shift)| {
                let role_name = shift
                    .as_ref()
                    .and_then(|shift| roles.get(&shift.role_id))
                    .map(|role| role.role_name.clone());

                ShiftRequestListItem {
                    request: ShiftRequest::from_entity(request),
                    shift_date: shift.as_ref().map(|s| s.date),
                    shift_start_time: shift.as_ref().map(|s| s.start_time),
                    shift_end_time: shift.as_ref().map(|s| s.end_time),
                    shift_role_id: shift.as_ref().map(|s| s.role_id),
                    shift_role_name: role_name,
                }
            })
            .collect();

        Ok((items, total))
    }

    /// Moves a pending request to the decision's status
    ///
    /// The update only matches rows still in `Pending`, so two concurrent reviews of
    /// the same request cannot both succeed.
    ///
    /// # Returns
    /// - `Ok(1)`: Request transitioned
    /// - `Ok(0)`: Request absent, deleted, or no longer pending
    /// - `Err(DbErr)`: Database error
    pub async fn review(
        &self,
        id: i32,
        decision: &ReviewDecision,
        admin: &str,
    ) -> Result<u64, DbErr> {
        let mut update = entity::prelude::ShiftRequest::update_many()
            .col_expr(
                entity::shift_request::Column::Status,
                Expr::value(decision.status()),
            )
            .col_expr(
                entity::shift_request::Column::AdminActor,
                Expr::value(admin.to_string()),
            )
            .col_expr(
                entity::shift_request::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .col_expr(
                entity::shift_request::Column::UpdatedBy,
                Expr::value(admin.to_string()),
            );

        if let ReviewDecision::Reject { reason } = decision {
            update = update.col_expr(
                entity::shift_request::Column::RejectionReason,
                Expr::value(reason.clone()),
            );
        }

        let result = update
            .filter(entity::shift_request::Column::Id.eq(id))
            .filter(entity::shift_request::Column::Status.eq(ShiftRequestStatus::Pending))
            .filter(entity::shift_request::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Checks whether the user has a pending request on a shift whose window touches
    /// `[start, end]` on `date`.
    ///
    /// Intervals are closed, so a shift ending at 12:00 overlaps one starting at 12:00.
    /// Requests on soft-deleted shifts are ignored.
    pub async fn has_overlapping_pending(
        &self,
        user_id: i32,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::ShiftRequest::find()
            .inner_join(entity::prelude::Shift)
            .filter(entity::shift_request::Column::UserId.eq(user_id))
            .filter(entity::shift_request::Column::Status.eq(ShiftRequestStatus::Pending))
            .filter(entity::shift_request::Column::DeletedAt.is_null())
            .filter(entity::shift::Column::DeletedAt.is_null())
            .filter(entity::shift::Column::Date.eq(date))
            .filter(entity::shift::Column::StartTime.lte(end))
            .filter(entity::shift::Column::EndTime.gte(start))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts the user's approved requests whose shift date falls in `[from, to]`.
    ///
    /// Requests on soft-deleted shifts are not counted.
    pub async fn count_approved_between(
        &self,
        user_id: i32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<u64, DbErr> {
        entity::prelude::ShiftRequest::find()
            .inner_join(entity::prelude::Shift)
            .filter(entity::shift_request::Column::UserId.eq(user_id))
            .filter(entity::shift_request::Column::Status.eq(ShiftRequestStatus::Approved))
            .filter(entity::shift_request::Column::DeletedAt.is_null())
            .filter(entity::shift::Column::DeletedAt.is_null())
            .filter(entity::shift::Column::Date.between(from, to))
            .count(self.db)
            .await
    }
}
