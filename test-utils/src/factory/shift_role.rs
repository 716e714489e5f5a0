//! Shift role factory for creating test role lookup entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ShiftRoleFactory<'a> {
    db: &'a DatabaseConnection,
    role_name: String,
    deleted: bool,
}

impl<'a> ShiftRoleFactory<'a> {
    /// Creates a new factory named `"Role {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            role_name: format!("Role {}", next_id()),
            deleted: false,
        }
    }

    pub fn role_name(mut self, role_name: impl Into<String>) -> Self {
        self.role_name = role_name.into();
        self
    }

    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    pub async fn build(self) -> Result<entity::shift_role::Model, DbErr> {
        let now = Utc::now();
        entity::shift_role::ActiveModel {
            role_name: ActiveValue::Set(self.role_name),
            created_at: ActiveValue::Set(now),
            created_by: ActiveValue::Set("system".to_string()),
            deleted_at: ActiveValue::Set(self.deleted.then_some(now)),
            deleted_by: ActiveValue::Set(self.deleted.then(|| "system".to_string())),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_shift_role(db: &DatabaseConnection) -> Result<entity::shift_role::Model, DbErr> {
    ShiftRoleFactory::new(db).build().await
}
