//! Custom extractors for Axum handlers.
//!
//! Both extractors reject with [`AppError`](crate::errors::AppError) so that
//! malformed input produces the same JSON error body as every other failure.

pub mod json_body;
pub mod object_id_path;

pub use json_body::JsonBody;
pub use object_id_path::ObjectIdPath;
