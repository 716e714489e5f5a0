//! Fills request details into error response bodies.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::server::error::ErrorReport;

/// Rebuilds the body of any response carrying an `ErrorReport` extension with the
/// request's method, URI and path.
pub async fn error_envelope(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let uri = request.uri().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<ErrorReport>() {
        Some(report) => {
            let body = report.to_dto(&method, &uri, &path);
            (report.status, Json(body)).into_response()
        }
        None => response,
    }
}
