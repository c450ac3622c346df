use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use super::{AppError, ErrorCode, error_response};

/// Fallback handler for unmatched routes.
pub async fn not_found(uri: Uri) -> Response {
    AppError::NotFound(format!("No route for {}", uri.path())).into_response()
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::MethodNotAllowed.default_message().to_string(),
        ErrorCode::MethodNotAllowed,
    )
}
