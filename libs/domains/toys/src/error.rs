use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToyError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Failed to encode toy document: {0}")]
    Encoding(String),
}

pub type ToyResult<T> = Result<T, ToyError>;

impl From<ToyError> for AppError {
    fn from(err: ToyError) -> Self {
        match err {
            ToyError::Database(msg) => AppError::Database(msg),
            ToyError::Encoding(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ToyError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

impl From<mongodb::error::Error> for ToyError {
    fn from(err: mongodb::error::Error) -> Self {
        ToyError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for ToyError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        ToyError::Encoding(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_database_error_is_internal_server_error() {
        let response = ToyError::Database("socket closed".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_encoding_error_is_internal_server_error() {
        let response = ToyError::Encoding("bad key".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
