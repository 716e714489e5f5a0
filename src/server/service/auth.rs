//! Registration and login.

use entity::user::UserRole;
use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        auth::{LoginParams, RegisterParams},
        user::CreateUserParams,
    },
    service::token::TokenService,
    util::password::{hash_password, verify_password},
};

/// Service issuing access tokens for new and returning users.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a worker account and returns its first token.
    ///
    /// # Arguments
    /// - `params` - Trimmed registration fields
    ///
    /// # Returns
    /// - `Ok(String)` - Token for the inserted user
    /// - `Err(AppError::BadRequest)` - Blank field or malformed email
    /// - `Err(AppError::AuthErr(DuplicateUser))` - Email already registered
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, params: RegisterParams) -> Result<String, AppError> {
        validate_registration(&params)?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&params.email).await?.is_some() {
            return Err(AuthError::DuplicateUser.into());
        }

        let password_hash = hash_password(&params.password)?;

        let user = user_repo
            .create(CreateUserParams {
                first_name: params.first_name,
                last_name: params.last_name,
                email: params.email.clone(),
                password_hash,
                role: UserRole::Worker,
                created_by: params.email,
            })
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => AuthError::DuplicateUser.into(),
                _ => AppError::from(err),
            })?;

        tracing::info!("Registered user {} ({})", user.id, user.email);

        Ok(self.tokens.issue(&user)?)
    }

    /// Verifies credentials and returns a fresh token.
    ///
    /// Unknown email and wrong password produce the same error.
    ///
    /// # Returns
    /// - `Ok(String)` - Token for the user
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Bad email or password
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(&self, params: LoginParams) -> Result<String, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&params.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&params.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!("User {} logged in", user.id);

        Ok(self.tokens.issue(&user)?)
    }
}

fn validate_registration(params: &RegisterParams) -> Result<(), AppError> {
    let fields = [
        ("first_name", params.first_name.as_str()),
        ("last_name", params.last_name.as_str()),
        ("email", params.email.as_str()),
        ("password", params.password.as_str()),
    ];

    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(AppError::BadRequest(format!("{} is required", name)));
        }
    }

    if !params.email.contains('@') {
        return Err(AppError::BadRequest("email is invalid".to_string()));
    }

    Ok(())
}
