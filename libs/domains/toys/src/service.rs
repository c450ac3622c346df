//! Toy Service - Business logic layer

use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;

use crate::error::ToyResult;
use crate::models::{DeleteAck, InsertAck, MyToysQuery, Toy, ToyInput, ToySummary, UpdateAck};
use crate::repository::ToyRepository;

/// Upper bound on the catalogue listing.
pub const LIST_LIMIT: i64 = 20;

pub struct ToyService<R: ToyRepository> {
    repository: Arc<R>,
}

impl<R: ToyRepository> ToyService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn search_toys(&self, text: &str) -> ToyResult<Vec<Toy>> {
        self.repository.search_by_title(text).await
    }

    /// First [`LIST_LIMIT`] toys in natural order.
    #[instrument(skip(self))]
    pub async fn list_toys(&self) -> ToyResult<Vec<ToySummary>> {
        self.repository.list_summaries(LIST_LIMIT).await
    }

    /// `None` when no toy has this id.
    #[instrument(skip(self))]
    pub async fn get_toy(&self, id: ObjectId) -> ToyResult<Option<Toy>> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn my_toys(&self, query: MyToysQuery) -> ToyResult<Vec<Toy>> {
        let seller_email = query.seller_email().map(str::to_owned);
        self.repository
            .list_by_seller(seller_email, query.price_sort())
            .await
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_toy(&self, input: ToyInput) -> ToyResult<InsertAck> {
        self.repository.insert(input).await
    }

    #[instrument(skip(self, input))]
    pub async fn replace_toy(&self, id: ObjectId, input: ToyInput) -> ToyResult<UpdateAck> {
        self.repository.replace(id, input).await
    }

    #[instrument(skip(self))]
    pub async fn delete_toy(&self, id: ObjectId) -> ToyResult<DeleteAck> {
        self.repository.delete(id).await
    }
}

impl<R: ToyRepository> Clone for ToyService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
