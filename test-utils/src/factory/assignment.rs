//! Worker shift assignment factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct AssignmentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    shift_id: i32,
    assigned_by: String,
    deleted: bool,
}

impl<'a> AssignmentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32, shift_id: i32) -> Self {
        Self {
            db,
            user_id,
            shift_id,
            assigned_by: "admin@example.com".to_string(),
            deleted: false,
        }
    }

    pub fn assigned_by(mut self, assigned_by: impl Into<String>) -> Self {
        self.assigned_by = assigned_by.into();
        self
    }

    /// Marks the assignment as soft-deleted, freeing the shift for the unique index.
    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    pub async fn build(self) -> Result<entity::worker_shift_assignment::Model, DbErr> {
        let now = Utc::now();
        entity::worker_shift_assignment::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            shift_id: ActiveValue::Set(self.shift_id),
            assigned_at: ActiveValue::Set(now),
            assigned_by: ActiveValue::Set(self.assigned_by.clone()),
            created_at: ActiveValue::Set(now),
            created_by: ActiveValue::Set(self.assigned_by),
            deleted_at: ActiveValue::Set(self.deleted.then_some(now)),
            deleted_by: ActiveValue::Set(self.deleted.then(|| "system".to_string())),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active assignment of `user_id` to `shift_id`.
pub async fn create_assignment(
    db: &DatabaseConnection,
    user_id: i32,
    shift_id: i32,
) -> Result<entity::worker_shift_assignment::Model, DbErr> {
    AssignmentFactory::new(db, user_id, shift_id).build().await
}
