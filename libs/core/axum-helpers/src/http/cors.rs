use axum::http::Method;
use std::time::Duration;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// Creates the CORS layer used by every service in the workspace.
///
/// Any origin is accepted. The request's `Origin` and requested headers are
/// echoed back rather than answered with `*`, which is what allows
/// credentials to be enabled at the same time.
///
/// - Methods: GET, POST, PUT, DELETE, OPTIONS
/// - Credentials allowed
/// - 1 hour max age
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
