use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::auth::AuthUser,
    service::token::Claims,
    state::AppState,
};

pub enum Permission {
    Admin,
}

/// Credential presented in the `Authorization` header.
enum Credential {
    Signed(Claims),
    StaticAdmin,
}

pub struct AuthGuard<'a> {
    state: &'a AppState,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, headers: &'a HeaderMap) -> Self {
        Self { state, headers }
    }

    /// Resolves the caller and checks every permission.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Authenticated caller holding all permissions
    /// - `Err(AppError::AuthErr(_))` - Missing or invalid token, deleted user, or
    ///   a missing permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<AuthUser, AppError> {
        let user = self.authenticate().await?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.email.clone(),
                            "User attempted an admin-only operation without the ADMIN role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Resolves the caller without any permission check.
    pub async fn authenticate(&self) -> Result<AuthUser, AppError> {
        match self.credential()? {
            Credential::StaticAdmin => {
                tracing::warn!("Request authenticated with the static admin token");
                Ok(AuthUser::static_admin())
            }
            Credential::Signed(claims) => {
                let user_repo = UserRepository::new(&self.state.db);

                let Some(user) = user_repo.find_by_id(claims.id).await? else {
                    return Err(AuthError::UserNotInDatabase(claims.id).into());
                };

                Ok(AuthUser::from_entity(user))
            }
        }
    }

    fn credential(&self) -> Result<Credential, AuthError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;

        if let Some(static_token) = &self.state.static_admin_token {
            if constant_time_eq(token.as_bytes(), static_token.as_bytes()) {
                return Ok(Credential::StaticAdmin);
            }
        }

        Ok(Credential::Signed(self.state.tokens.verify(token)?))
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Compares without an early exit on the first differing byte.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
