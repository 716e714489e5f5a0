//! Caller identity and authentication parameters.

use entity::user::UserRole;

use crate::{
    model::auth::{CurrentUserDto, LoginDto, RegisterDto},
    server::model::user::role_into_dto,
};

/// Id reported for the static admin identity, which has no user row.
pub const STATIC_ADMIN_ID: i32 = 0;
/// Email reported for the static admin identity.
pub const STATIC_ADMIN_EMAIL: &str = "system-admin@roster.local";

/// How the caller proved their identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
    /// HS256 token issued by register or login.
    SignedToken,
    /// Configured static admin token, bypassing signature checks.
    StaticAdminToken,
}

/// Identity and role of the caller, uniform across authentication methods.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub method: AuthMethod,
}

impl AuthUser {
    pub fn static_admin() -> Self {
        Self {
            id: STATIC_ADMIN_ID,
            first_name: "admin".to_string(),
            last_name: "rms".to_string(),
            email: STATIC_ADMIN_EMAIL.to_string(),
            role: UserRole::Admin,
            method: AuthMethod::StaticAdminToken,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            role: entity.role,
            method: AuthMethod::SignedToken,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin || self.method == AuthMethod::StaticAdminToken
    }

    pub fn into_dto(self) -> CurrentUserDto {
        CurrentUserDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            role: role_into_dto(self.role),
            static_token: self.method == AuthMethod::StaticAdminToken,
        }
    }
}

/// Registration input after trimming.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            email: dto.email.trim().to_string(),
            password: dto.password,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email.trim().to_string(),
            password: dto.password,
        }
    }
}
