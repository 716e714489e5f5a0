use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserRoleDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub token: String,
}

/// Identity resolved from the caller's bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CurrentUserDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRoleDto,
    /// Whether the caller authenticated with the static admin token.
    pub static_token: bool,
}
