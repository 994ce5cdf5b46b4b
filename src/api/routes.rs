//! Router configuration for the API.
//!
//! Centralized route registration, middleware layering, and OpenAPI
//! document assembly.

use axum::{Router, middleware};
use tower_http::{compression::CompressionLayer, cors::CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers::{docs, health};
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration, so request_id
/// runs before logging and the logged request already carries its ID.
///
/// # Routes
/// - `/admin/docs` - Doc CRUD operations
/// - `/tts` - Doc listing
/// - `/health`, `/health/ready`, `/health/live` - Probes
/// - `/swagger-ui` - Interactive API documentation
pub fn create_router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/admin/docs", docs::doc_routes())
        .merge(docs::doc_list_routes())
        .merge(health::health_routes())
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
