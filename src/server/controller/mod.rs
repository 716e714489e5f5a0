//! HTTP request handlers.
//!
//! Controllers authenticate the caller through `AuthGuard`, convert DTOs into domain
//! parameters, call a service and wrap the result in the success envelope.

pub mod auth;
pub mod health;
pub mod shift;
pub mod shift_request;
pub mod user;
