use axum::Router;
use domain_toys::{MongoToyRepository, ToyService, handlers};
use tracing::info;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoToyRepository::new(state.db.clone());
    handlers::router(ToyService::new(repository))
}

/// Create the toy collection indexes; failure aborts startup.
pub async fn init_indexes(db: &mongodb::Database) -> eyre::Result<()> {
    MongoToyRepository::new(db.clone())
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create toy indexes: {}", e))?;
    info!("Toy collection indexes created");
    Ok(())
}
