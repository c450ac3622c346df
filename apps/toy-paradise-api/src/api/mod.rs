//! HTTP routes of the service.

pub mod categories;
pub mod health;
pub mod toys;

use axum::{Router, routing::get};
use axum_helpers::server::health_router;

use crate::state::AppState;

pub const LIVENESS_TEXT: &str = "toy paradise server running...";

/// Liveness text
#[utoipa::path(
    get,
    path = "/",
    tag = "Service",
    responses(
        (status = 200, description = "Server is running", body = String, content_type = "text/plain")
    )
)]
pub async fn root() -> &'static str {
    LIVENESS_TEXT
}

/// All routes; domain routers carry absolute paths and are merged at the root.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(toys::router(state))
        .merge(categories::router(state))
        .merge(health::router(state.clone()))
        .merge(health_router(state.config.app))
}
