//! Wire-level request and response types shared by every API endpoint.

pub mod api;
pub mod assignment;
pub mod auth;
pub mod health;
pub mod shift;
pub mod shift_request;
pub mod user;
