use axum::http::StatusCode;
use thiserror::Error;

use crate::{model::api::ResponseCode, server::error::ErrorReport};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on a protected endpoint.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token failed signature, expiry or format validation.
    #[error("Invalid token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// Token is valid but its user no longer exists or was soft-deleted.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Caller lacks a permission required by the endpoint.
    ///
    /// # Fields
    /// - Email of the denied caller
    /// - Reason logged server-side
    #[error("Access denied for {0}: {1}")]
    AccessDenied(String, String),

    /// Unknown email or wrong password on login.
    #[error("Invalid Email/Password")]
    InvalidCredentials,

    /// Registration with an email that already has an account.
    #[error("User already exists")]
    DuplicateUser,

    /// Password hashing or hash parsing failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Token signing failed.
    #[error("Failed to sign token: {0}")]
    TokenEncode(#[source] jsonwebtoken::errors::Error),
}

impl AuthError {
    /// Maps authentication errors to status codes and client-facing messages.
    ///
    /// Token and permission failures are logged at debug level and collapse into
    /// "Invalid Token" / "User unauthorized" so clients learn nothing about which
    /// check failed.
    ///
    /// # Returns
    /// - 400 Bad Request - `InvalidCredentials`, `DuplicateUser`
    /// - 401 Unauthorized - `MissingToken`, `InvalidToken`, `UserNotInDatabase`, `AccessDenied`
    /// - 500 Internal Server Error - `PasswordHash`, `TokenEncode`
    pub fn report(&self) -> ErrorReport {
        match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                ErrorReport::new(
                    StatusCode::UNAUTHORIZED,
                    ResponseCode::Unauthorized,
                    "Invalid Token",
                )
            }
            Self::AccessDenied(_, _) => {
                tracing::debug!("{}", self);
                ErrorReport::new(
                    StatusCode::UNAUTHORIZED,
                    ResponseCode::Unauthorized,
                    "User unauthorized",
                )
            }
            Self::InvalidCredentials => ErrorReport::new(
                StatusCode::BAD_REQUEST,
                ResponseCode::BadRequest,
                self.to_string(),
            ),
            Self::DuplicateUser => ErrorReport::new(
                StatusCode::BAD_REQUEST,
                ResponseCode::DuplicateUser,
                self.to_string(),
            ),
            Self::PasswordHash(_) | Self::TokenEncode(_) => {
                tracing::error!("{}", self);
                ErrorReport::internal()
            }
        }
    }
}
