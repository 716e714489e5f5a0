use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::auth::{AuthMethod, STATIC_ADMIN_EMAIL, STATIC_ADMIN_ID},
    service::token::TokenService,
    state::AppState,
};
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use entity::user::UserRole;
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

mod authenticate;

const STATIC_TOKEN: &str = "static-admin-token";

fn state(db: &DatabaseConnection, static_token: Option<&str>) -> AppState {
    AppState::new(
        db.clone(),
        TokenService::new("test-secret".to_string(), 60),
        static_token.map(str::to_string),
        5,
    )
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
