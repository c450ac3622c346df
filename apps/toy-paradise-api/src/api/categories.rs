use axum::Router;
use domain_categories::{CategoryService, MongoCategoryRepository, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoCategoryRepository::new(state.db.clone());
    handlers::router(CategoryService::new(repository))
}
