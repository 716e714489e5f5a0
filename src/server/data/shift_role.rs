use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::shift::ShiftRole;

pub struct ShiftRoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShiftRoleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, role_name: String, actor: String) -> Result<ShiftRole, DbErr> {
        let role = entity::shift_role::ActiveModel {
            role_name: ActiveValue::Set(role_name),
            created_at: ActiveValue::Set(Utc::now()),
            created_by: ActiveValue::Set(actor),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ShiftRole::from_entity(role))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ShiftRole>, DbErr> {
        let role = entity::prelude::ShiftRole::find_by_id(id)
            .filter(entity::shift_role::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(role.map(ShiftRole::from_entity))
    }

    /// Gets every non-deleted role ordered by name.
    pub async fn get_all(&self) -> Result<Vec<ShiftRole>, DbErr> {
        let roles = entity::prelude::ShiftRole::find()
            .filter(entity::shift_role::Column::DeletedAt.is_null())
            .order_by_asc(entity::shift_role::Column::RoleName)
            .all(self.db)
            .await?;

        Ok(roles.into_iter().map(ShiftRole::from_entity).collect())
    }

    /// Counts role rows, soft-deleted ones included.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::ShiftRole::find().count(self.db).await
    }
}
