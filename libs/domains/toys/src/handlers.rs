use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use axum_helpers::{
    JsonBody, ObjectIdPath,
    errors::responses::{
        BadRequestJsonResponse, BadRequestObjectIdResponse, InternalServerErrorResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ToyResult;
use crate::models::{DeleteAck, InsertAck, MyToysQuery, Toy, ToyInput, ToySummary, UpdateAck};
use crate::repository::ToyRepository;
use crate::service::ToyService;

/// OpenAPI documentation for the toy endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        search_toys,
        list_toys,
        create_toy,
        get_toy,
        get_toy_for_update,
        replace_toy,
        delete_toy,
        my_toys,
    ),
    components(
        schemas(Toy, ToySummary, ToyInput, InsertAck, UpdateAck, DeleteAck),
        responses(
            BadRequestObjectIdResponse,
            BadRequestJsonResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Toys", description = "Toy listings in the allToys collection")
    )
)]
pub struct ApiDoc;

/// Router serving the toy endpoints at their absolute paths.
pub fn router<R: ToyRepository + 'static>(service: ToyService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/searchByToy/{text}", get(search_toys))
        .route("/allToys", get(list_toys).post(create_toy))
        .route(
            "/allToys/{id}",
            get(get_toy).put(replace_toy).delete(delete_toy),
        )
        .route("/update/{id}", get(get_toy_for_update))
        .route("/myToys", get(my_toys))
        .with_state(shared_service)
}

/// Search toys by title (case-insensitive substring)
#[utoipa::path(
    get,
    path = "/searchByToy/{text}",
    tag = "Toys",
    params(
        ("text" = String, Path, description = "Text the title must contain")
    ),
    responses(
        (status = 200, description = "Matching toys, possibly empty", body = Vec<Toy>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_toys<R: ToyRepository>(
    State(service): State<Arc<ToyService<R>>>,
    Path(text): Path<String>,
) -> ToyResult<Json<Vec<Toy>>> {
    let toys = service.search_toys(&text).await?;
    Ok(Json(toys))
}

/// List up to 20 toys
#[utoipa::path(
    get,
    path = "/allToys",
    tag = "Toys",
    responses(
        (status = 200, description = "Toy summaries", body = Vec<ToySummary>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_toys<R: ToyRepository>(
    State(service): State<Arc<ToyService<R>>>,
) -> ToyResult<Json<Vec<ToySummary>>> {
    let toys = service.list_toys().await?;
    Ok(Json(toys))
}

/// Create a toy
#[utoipa::path(
    post,
    path = "/allToys",
    tag = "Toys",
    request_body = ToyInput,
    responses(
        (status = 200, description = "Toy inserted", body = InsertAck),
        (status = 400, response = BadRequestJsonResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_toy<R: ToyRepository>(
    State(service): State<Arc<ToyService<R>>>,
    JsonBody(input): JsonBody<ToyInput>,
) -> ToyResult<Json<InsertAck>> {
    let ack = service.create_toy(input).await?;
    Ok(Json(ack))
}

/// Get a toy by id
#[utoipa::path(
    get,
    path = "/allToys/{id}",
    tag = "Toys",
    params(
        ("id" = String, Path, description = "Toy ObjectId (24 hex characters)")
    ),
    responses(
        (status = 200, description = "The toy, or null when no toy has this id", body = Toy),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_toy<R: ToyRepository>(
    State(service): State<Arc<ToyService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> ToyResult<Json<Option<Toy>>> {
    let toy = service.get_toy(id).await?;
    Ok(Json(toy))
}

/// Get a toy by id to prefill an edit form
#[utoipa::path(
    get,
    path = "/update/{id}",
    tag = "Toys",
    params(
        ("id" = String, Path, description = "Toy ObjectId (24 hex characters)")
    ),
    responses(
        (status = 200, description = "The toy, or null when no toy has this id", body = Toy),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_toy_for_update<R: ToyRepository>(
    state: State<Arc<ToyService<R>>>,
    id: ObjectIdPath,
) -> ToyResult<Json<Option<Toy>>> {
    get_toy(state, id).await
}

/// Replace the fields of a toy, creating it when absent
#[utoipa::path(
    put,
    path = "/allToys/{id}",
    tag = "Toys",
    params(
        ("id" = String, Path, description = "Toy ObjectId (24 hex characters)")
    ),
    request_body = ToyInput,
    responses(
        (status = 200, description = "Write acknowledgement", body = UpdateAck),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn replace_toy<R: ToyRepository>(
    State(service): State<Arc<ToyService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
    JsonBody(input): JsonBody<ToyInput>,
) -> ToyResult<Json<UpdateAck>> {
    let ack = service.replace_toy(id, input).await?;
    Ok(Json(ack))
}

/// Delete a toy
#[utoipa::path(
    delete,
    path = "/allToys/{id}",
    tag = "Toys",
    params(
        ("id" = String, Path, description = "Toy ObjectId (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Delete acknowledgement; deletedCount is 0 when nothing matched", body = DeleteAck),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_toy<R: ToyRepository>(
    State(service): State<Arc<ToyService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> ToyResult<Json<DeleteAck>> {
    let ack = service.delete_toy(id).await?;
    Ok(Json(ack))
}

/// List a seller's toys, optionally sorted by price
#[utoipa::path(
    get,
    path = "/myToys",
    tag = "Toys",
    params(MyToysQuery),
    responses(
        (status = 200, description = "Toys of the seller, or all toys without an email", body = Vec<Toy>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn my_toys<R: ToyRepository>(
    State(service): State<Arc<ToyService<R>>>,
    Query(query): Query<MyToysQuery>,
) -> ToyResult<Json<Vec<Toy>>> {
    let toys = service.my_toys(query).await?;
    Ok(Json(toys))
}
