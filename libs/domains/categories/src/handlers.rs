use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use axum_helpers::{
    ObjectIdPath,
    errors::responses::{BadRequestObjectIdResponse, InternalServerErrorResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CategoryResult;
use crate::models::{Category, CategorySummary};
use crate::repository::CategoryRepository;
use crate::service::CategoryService;

#[derive(OpenApi)]
#[openapi(
    paths(list_sub_category, get_category),
    components(
        schemas(Category, CategorySummary),
        responses(BadRequestObjectIdResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Categories", description = "Category cards in the toyCategories collection")
    )
)]
pub struct ApiDoc;

pub fn router<R: CategoryRepository + 'static>(service: CategoryService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/action_figure/{category}", get(list_sub_category))
        .route("/category/{id}", get(get_category))
        .with_state(shared_service)
}

/// List the cards of one sub-category
#[utoipa::path(
    get,
    path = "/action_figure/{category}",
    tag = "Categories",
    params(
        ("category" = String, Path, description = "Exact subCategory value, e.g. Marvel")
    ),
    responses(
        (status = 200, description = "Category cards, possibly empty", body = Vec<CategorySummary>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_sub_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    Path(category): Path<String>,
) -> CategoryResult<Json<Vec<CategorySummary>>> {
    let cards = service.list_sub_category(&category).await?;
    Ok(Json(cards))
}

/// Get a category card by id
#[utoipa::path(
    get,
    path = "/category/{id}",
    tag = "Categories",
    params(
        ("id" = String, Path, description = "Category ObjectId (24 hex characters)")
    ),
    responses(
        (status = 200, description = "The card, or null when no card has this id", body = Category),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> CategoryResult<Json<Option<Category>>> {
    let category = service.get_category(id).await?;
    Ok(Json(category))
}
