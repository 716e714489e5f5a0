//! User domain models and parameters.

use chrono::{DateTime, Utc};
use entity::user::UserRole;

use crate::model::user::{UserRoleDto, WorkerDto};

/// Registered account without its password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model at the repository boundary, dropping the password hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            role: entity.role,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> WorkerDto {
        WorkerDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            role: role_into_dto(self.role),
        }
    }
}

pub fn role_into_dto(role: UserRole) -> UserRoleDto {
    match role {
        UserRole::Worker => UserRoleDto::Worker,
        UserRole::Admin => UserRoleDto::Admin,
    }
}

/// Parameters for inserting a user row.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// PHC formatted Argon2 hash.
    pub password_hash: String,
    pub role: UserRole,
    /// Identity recorded in `created_by`.
    pub created_by: String,
}
