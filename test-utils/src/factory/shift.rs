//! Shift factory for creating test shift entities.

use crate::factory::helpers::{date, next_id, time};
use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test shifts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let shift = ShiftFactory::new(&db, role.id)
///     .date(date(2025, 6, 3))
///     .times(time(9, 0), time(10, 0))
///     .build()
///     .await?;
/// ```
pub struct ShiftFactory<'a> {
    db: &'a DatabaseConnection,
    role_id: i32,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    location: Option<String>,
    is_active: bool,
    deleted: bool,
}

impl<'a> ShiftFactory<'a> {
    /// Creates a new ShiftFactory with default values.
    ///
    /// Defaults:
    /// - date: Monday 2025-06-02
    /// - start_time / end_time: 08:00 to 16:00
    /// - location: `Some("Site {id}")`
    /// - is_active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `role_id` - Shift role the shift belongs to
    pub fn new(db: &'a DatabaseConnection, role_id: i32) -> Self {
        Self {
            db,
            role_id,
            date: date(2025, 6, 2),
            start_time: time(8, 0),
            end_time: time(16, 0),
            location: Some(format!("Site {}", next_id())),
            is_active: true,
            deleted: false,
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets both ends of the shift's time window.
    pub fn times(mut self, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        self.start_time = start_time;
        self.end_time = end_time;
        self
    }

    pub fn location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Builds and inserts the shift entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::shift::Model)` - Created shift entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::shift::Model, DbErr> {
        let now = Utc::now();
        entity::shift::ActiveModel {
            date: ActiveValue::Set(self.date),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            role_id: ActiveValue::Set(self.role_id),
            location: ActiveValue::Set(self.location),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            created_by: ActiveValue::Set("admin@example.com".to_string()),
            deleted_at: ActiveValue::Set(self.deleted.then_some(now)),
            deleted_by: ActiveValue::Set(self.deleted.then(|| "admin@example.com".to_string())),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a shift with default values for the given role.
pub async fn create_shift(
    db: &DatabaseConnection,
    role_id: i32,
) -> Result<entity::shift::Model, DbErr> {
    ShiftFactory::new(db, role_id).build().await
}
