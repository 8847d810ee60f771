//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use std::time::Duration;

use axum::{Json, Router, http::StatusCode, middleware, routing::get};
use tower_http::timeout::TimeoutLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{
    auth_middleware, global_error_handler, logging_middleware, request_id_middleware,
};
use crate::state::AppState;

/// Path the generated OpenAPI document is served from
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. Request ID middleware - generates/propagates request IDs
/// 2. Logging middleware - logs requests with request IDs
/// 3. Global error handler - rewrites framework errors into the envelope
/// 4. Request timeout
///
/// # Routes
/// - Public: `/login`, `/register`, `/logout`, `/api-docs/openapi.json`
/// - Behind the auth gate: `/users`, `/books`, `/categories`, `/orders`,
///   `/order_items`, `/upload`, `/me`
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    let protected = OpenApiRouter::new()
        .merge(handlers::users::user_routes())
        .merge(handlers::books::book_routes())
        .merge(handlers::categories::category_routes())
        .merge(handlers::orders::order_routes())
        .merge(handlers::upload::upload_routes(state.upload.max_size))
        .merge(handlers::me::me_routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let (router, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(handlers::auth::auth_routes())
        .merge(protected)
        .split_for_parts();

    router
        .route(
            OPENAPI_PATH,
            get(move || {
                let openapi = openapi.clone();
                async move { Json(openapi) }
            }),
        )
        // Middleware is applied in reverse order - last added runs first
        .layer(request_timeout_layer(request_timeout))
        .layer(middleware::from_fn(global_error_handler))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// Requests running past `timeout` are answered with 408.
fn request_timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}
