//! Signed access token issuance and verification.

use std::fmt;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

use crate::server::error::auth::AuthError;

/// Claim set carried by every issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// `WORKER` or `ADMIN` at issuance time.
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and validates HS256 tokens with a server-held secret.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    expiration_minutes: i64,
}

impl TokenService {
    pub fn new(secret: String, expiration_minutes: i64) -> Self {
        Self {
            secret,
            expiration_minutes,
        }
    }

    /// Signs a token for the given user row
    ///
    /// # Arguments
    /// - `user`: Freshly inserted or verified user
    ///
    /// # Returns
    /// - `Ok(String)`: Encoded token
    /// - `Err(AuthError::TokenEncode)`: Signing failed
    pub fn issue(&self, user: &entity::user::Model) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            role: user.role.to_value(),
            iat: now,
            exp: now + self.expiration_minutes * 60,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(AuthError::TokenEncode)
    }

    /// Validates signature and expiry and returns the claims
    ///
    /// # Returns
    /// - `Ok(Claims)`: Token is authentic and unexpired
    /// - `Err(AuthError::InvalidToken)`: Bad signature, malformed or expired
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(AuthError::InvalidToken)?;

        Ok(data.claims)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("secret", &"<redacted>")
            .field("expiration_minutes", &self.expiration_minutes)
            .finish()
    }
}
