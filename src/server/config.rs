use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_ADDRESS: &str = "0.0.0.0:8082";
const DEFAULT_JWT_EXPIRATION_MINUTES: i64 = 24 * 60;
const DEFAULT_MAX_SHIFTS_PER_WEEK: u64 = 5;

pub struct Config {
    pub database_url: String,
    pub app_address: String,

    pub jwt_secret: String,
    pub jwt_expiration_minutes: i64,
    /// Bearer token granting the built-in admin identity; disabled when `None`.
    pub jwt_static_token: Option<String>,

    pub max_shifts_per_week: u64,

    pub enable_seed_db: bool,
    pub seed_admin_email: Option<String>,
    pub seed_admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require =
            |name: &str| get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            app_address: get("APP_ADDRESS").unwrap_or_else(|| DEFAULT_APP_ADDRESS.to_string()),
            jwt_secret: require("JWT_SECRET")?,
            jwt_expiration_minutes: parse_or(
                "JWT_EXPIRATION_MINUTES",
                get("JWT_EXPIRATION_MINUTES"),
                DEFAULT_JWT_EXPIRATION_MINUTES,
            )?,
            jwt_static_token: get("JWT_STATIC_TOKEN"),
            max_shifts_per_week: parse_or(
                "MAX_SHIFTS_PER_WEEK",
                get("MAX_SHIFTS_PER_WEEK"),
                DEFAULT_MAX_SHIFTS_PER_WEEK,
            )?,
            enable_seed_db: parse_or("ENABLE_SEED_DB", get("ENABLE_SEED_DB"), false)?,
            seed_admin_email: get("SEED_ADMIN_EMAIL"),
            seed_admin_password: get("SEED_ADMIN_PASSWORD"),
        })
    }
}

fn parse_or<T: FromStr>(name: &str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
    }
}
