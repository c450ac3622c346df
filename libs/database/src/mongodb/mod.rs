//! MongoDB connector and utilities
//!
//! Provides connection management, health checks and lenient decode helpers.

mod config;
mod connector;
mod health;
pub mod lenient;

pub use config::MongoConfig;
pub use connector::{MongoError, connect_from_config, connect_from_config_with_retry};
pub use health::{HealthStatus, check_health_detailed, ping};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
