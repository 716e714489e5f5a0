//! User service for business logic.
//!
//! This module provides the `UserService` for worker lookups used by the admin UI and
//! by request scoping.

use entity::user::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::AppError, model::user::User};

/// Service providing business logic for user queries.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every non-deleted worker, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All workers (empty if none exist)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_workers(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db)
            .get_by_role(UserRole::Worker)
            .await?)
    }

    /// Retrieves a non-deleted user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No such user
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(User::from_entity)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
