mod admin;
mod error;

pub use admin::{
    CleanupResponse, CollectionSizeResponse, CollectionSizesResponse, MessageResponse,
    PolicyConfigResponse, PolicyResponse, UpdatePolicyRequest,
};
pub use error::{ApiError, Result};

use axum::Router;
use sitewatch_retention::CleanupOrchestrator;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sitewatch Admin API",
        description = "Retention controls for facility telemetry",
        license(name = "AGPL-3.0-or-later"),
    ),
    tags((name = "retention", description = "Telemetry retention cleanup"))
)]
struct ApiDoc;

#[utoipa::path(get, path = "/health", responses((status = OK, body = str)))]
async fn health() -> &'static str {
    "ok"
}

pub fn router(orchestrator: Arc<CleanupOrchestrator>) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(utoipa_axum::routes!(health))
        .routes(utoipa_axum::routes!(admin::run_cleanup))
        .routes(utoipa_axum::routes!(admin::force_cleanup))
        .routes(utoipa_axum::routes!(admin::collection_sizes))
        .routes(utoipa_axum::routes!(
            admin::get_cleanup_config,
            admin::update_cleanup_config
        ))
        .with_state(orchestrator)
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/openapi.json", api))
        .layer(TraceLayer::new_for_http())
}
