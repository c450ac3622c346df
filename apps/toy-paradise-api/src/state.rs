//! Shared application state.

use mongodb::{Client, Database};

/// Cloned into every router that needs it; the MongoDB client is a pooled handle.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mongo_client: Client,
    pub db: Database,
}
