use axum::{middleware, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        health::{self, HEALTH_TAG},
        shift::{self, SHIFT_TAG},
        shift_request::{self, SHIFT_REQUEST_TAG},
        user::{self, USER_TAG},
    },
    middleware::envelope::error_envelope,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Roster API", description = "Shift scheduling and assignment"),
    tags(
        (name = AUTH_TAG, description = "Registration, login and identity"),
        (name = SHIFT_TAG, description = "Shift management"),
        (name = SHIFT_REQUEST_TAG, description = "Shift requests and assignments"),
        (name = USER_TAG, description = "User lookups"),
        (name = HEALTH_TAG, description = "Liveness probe")
    )
)]
struct ApiDoc;

/// Builds the full application router with documentation, CORS, tracing and the
/// error envelope applied to every route.
pub fn router(state: AppState) -> Router {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::me))
        .routes(routes!(shift::create_shift, shift::get_shifts))
        .routes(routes!(
            shift::get_shift,
            shift::update_shift,
            shift::delete_shift
        ))
        .routes(routes!(shift::get_shift_roles))
        .routes(routes!(shift_request::get_assignments))
        .routes(routes!(
            shift_request::create_shift_request,
            shift_request::get_shift_requests
        ))
        .routes(routes!(shift_request::approve_shift_request))
        .routes(routes!(shift_request::reject_shift_request))
        .routes(routes!(user::get_workers))
        .split_for_parts();

    api_router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(middleware::from_fn(error_envelope))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
