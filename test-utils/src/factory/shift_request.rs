//! Shift request factory for creating test shift request entities.

use chrono::{DateTime, Utc};
use entity::shift_request::ShiftRequestStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test shift requests.
///
/// Defaults to a `Pending` request filed by `"worker@example.com"`.
pub struct ShiftRequestFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    shift_id: i32,
    status: ShiftRequestStatus,
    requested_by: String,
    created_at: DateTime<Utc>,
    deleted: bool,
}

impl<'a> ShiftRequestFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32, shift_id: i32) -> Self {
        Self {
            db,
            user_id,
            shift_id,
            status: ShiftRequestStatus::Pending,
            requested_by: "worker@example.com".to_string(),
            created_at: Utc::now(),
            deleted: false,
        }
    }

    pub fn status(mut self, status: ShiftRequestStatus) -> Self {
        self.status = status;
        self
    }

    pub fn requested_by(mut self, requested_by: impl Into<String>) -> Self {
        self.requested_by = requested_by.into();
        self
    }

    /// Overrides the creation timestamp used for list ordering.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    pub async fn build(self) -> Result<entity::shift_request::Model, DbErr> {
        let admin_actor = match self.status {
            ShiftRequestStatus::Pending => None,
            _ => Some("admin@example.com".to_string()),
        };

        entity::shift_request::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            shift_id: ActiveValue::Set(self.shift_id),
            status: ActiveValue::Set(self.status),
            requested_by: ActiveValue::Set(self.requested_by.clone()),
            admin_actor: ActiveValue::Set(admin_actor),
            rejection_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            created_by: ActiveValue::Set(self.requested_by),
            deleted_at: ActiveValue::Set(self.deleted.then(Utc::now)),
            deleted_by: ActiveValue::Set(self.deleted.then(|| "system".to_string())),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending shift request.
pub async fn create_shift_request(
    db: &DatabaseConnection,
    user_id: i32,
    shift_id: i32,
) -> Result<entity::shift_request::Model, DbErr> {
    ShiftRequestFactory::new(db, user_id, shift_id).build().await
}
