//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::user::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let admin = UserFactory::new(&db)
///     .email("admin@example.com")
///     .role(UserRole::Admin)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    password_hash: String,
    role: UserRole,
    deleted: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Worker"`, last_name: `"{id}"`
    /// - email: `"worker{id}@example.com"`
    /// - password_hash: a placeholder that never verifies
    /// - role: `UserRole::Worker`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Worker".to_string(),
            last_name: id.to_string(),
            email: format!("worker{}@example.com", id),
            password_hash: "not-a-password-hash".to_string(),
            role: UserRole::Worker,
            deleted: false,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash (a PHC string when login is exercised).
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Marks the user as soft-deleted.
    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            role: ActiveValue::Set(self.role),
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

/// Creates a worker with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an admin with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db)
        .first_name("Admin")
        .role(UserRole::Admin)
        .build()
        .await
}
