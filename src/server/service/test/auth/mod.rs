use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::{LoginParams, RegisterParams},
    service::{auth::AuthService, token::TokenService},
};
use entity::user::UserRole;
use test_utils::{builder::TestBuilder, factory};


fn tokens() -> TokenService {
    TokenService::new("test-secret".to_string(), 60)
}

fn register_params(email: &str, password: &str) -> RegisterParams {
    RegisterParams {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}
