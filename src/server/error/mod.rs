//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. `AppError` is the top-level error type that
//! wraps domain-specific errors and implements `IntoResponse`. Every error response
//! carries an `ErrorReport` extension which the envelope middleware expands into the
//! full error body once the request path is known.

pub mod auth;
pub mod config;
pub mod shift;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ErrorMetadataDto, ResponseCode, FAILURE},
    server::error::{auth::AuthError, config::ConfigError, shift::ShiftError},
};

/// Message returned to clients in place of infrastructure error details.
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors such as `AuthError`
/// and `ShiftError` choose their own status and response code, while generic variants
/// map to standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::report()` for status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Business rule violation in the shift workflow.
    ///
    /// Always results in 400 Bad Request.
    #[error(transparent)]
    ShiftErr(#[from] ShiftError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or runtime I/O failure while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Status, code and client-facing message of a failed request.
///
/// Inserted into the response extensions so the envelope middleware can rebuild the
/// body with request details.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    pub status: StatusCode,
    pub code: ResponseCode,
    pub error: String,
}

impl ErrorReport {
    pub fn new(status: StatusCode, code: ResponseCode, error: impl Into<String>) -> Self {
        Self {
            status,
            code,
            error: error.into(),
        }
    }

    /// Generic 500 report that hides the underlying error.
    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ResponseCode::ServerError,
            INTERNAL_ERROR_MESSAGE,
        )
    }

    /// Builds the error envelope for a request.
    ///
    /// # Arguments
    /// - `method` - HTTP method of the failed request
    /// - `uri` - Request URI including the query string
    /// - `path` - Request path
    ///
    /// # Returns
    /// - `ErrorDto` - Envelope with `"<METHOD> <URI> [<code>] <Status Text>"` as message
    pub fn to_dto(&self, method: &str, uri: &str, path: &str) -> ErrorDto {
        let status_text = self.status.canonical_reason().unwrap_or("Unknown");

        ErrorDto {
            metadata: ErrorMetadataDto {
                path: path.to_string(),
                code: self.code,
                status_code: self.status.as_u16(),
                status: status_text.to_string(),
                message: format!(
                    "{} {} [{}] {}",
                    method,
                    uri,
                    self.code.as_str(),
                    status_text
                ),
                error: self.error.clone(),
                timestamp: Utc::now().to_rfc3339(),
            },
            success: FAILURE.to_string(),
        }
    }
}

impl IntoResponse for ErrorReport {
    fn into_response(self) -> Response {
        let body = self.to_dto("", "", "");
        let mut response = (self.status, Json(body)).into_response();
        response.extensions_mut().insert(self);
        response
    }
}

impl AppError {
    /// Maps the error to the report sent to the client.
    ///
    /// Infrastructure failures are logged here with full detail and collapse into a
    /// generic server error report.
    pub fn report(&self) -> ErrorReport {
        match self {
            Self::AuthErr(err) => err.report(),
            Self::ShiftErr(err) => {
                ErrorReport::new(StatusCode::BAD_REQUEST, ResponseCode::BadRequest, err.to_string())
            }
            Self::NotFound(msg) => {
                ErrorReport::new(StatusCode::NOT_FOUND, ResponseCode::NotFound, msg.clone())
            }
            Self::BadRequest(msg) => {
                ErrorReport::new(StatusCode::BAD_REQUEST, ResponseCode::BadRequest, msg.clone())
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                ErrorReport::internal()
            }
            err => {
                tracing::error!("{}", err);
                ErrorReport::internal()
            }
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, `ShiftErr` and credential/duplicate auth errors
/// - 401 Unauthorized - For token and permission failures
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.report().into_response()
    }
}
