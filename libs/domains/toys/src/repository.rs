use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::ToyResult;
use crate::models::{DeleteAck, InsertAck, PriceSort, Toy, ToyInput, ToySummary, UpdateAck};

/// Data access for toy listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ToyRepository: Send + Sync {
    /// Toys whose title contains `text`, ignoring case
    async fn search_by_title(&self, text: &str) -> ToyResult<Vec<Toy>>;

    /// Unfiltered listing projected to summaries, at most `limit` records
    async fn list_summaries(&self, limit: i64) -> ToyResult<Vec<ToySummary>>;

    async fn get_by_id(&self, id: ObjectId) -> ToyResult<Option<Toy>>;

    /// Toys of one seller (or of everyone when `seller_email` is `None`), optionally price-ordered
    async fn list_by_seller(
        &self,
        seller_email: Option<String>,
        sort: Option<PriceSort>,
    ) -> ToyResult<Vec<Toy>>;

    async fn insert(&self, input: ToyInput) -> ToyResult<InsertAck>;

    /// Overwrite the mutable fields of `id`, creating the document when absent
    async fn replace(&self, id: ObjectId, input: ToyInput) -> ToyResult<UpdateAck>;

    async fn delete(&self, id: ObjectId) -> ToyResult<DeleteAck>;
}
