//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use super::service::token::TokenService;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and the rest
/// are small owned values.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs and validates access tokens.
    pub tokens: TokenService,

    /// Static admin bearer token. The bypass is disabled when `None`.
    pub static_admin_token: Option<String>,

    /// Weekly cap of approved requests per user.
    pub max_shifts_per_week: u64,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service configured with the signing secret
    /// - `static_admin_token` - Optional static admin token
    /// - `max_shifts_per_week` - Weekly approved request cap
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        static_admin_token: Option<String>,
        max_shifts_per_week: u64,
    ) -> Self {
        Self {
            db,
            tokens,
            static_admin_token,
            max_shifts_per_week,
        }
    }
}
