//! MongoDB implementation of CategoryRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc, oid::ObjectId},
    options::FindOptions,
};
use tracing::instrument;

use crate::error::CategoryResult;
use crate::models::{Category, CategorySummary};
use crate::repository::CategoryRepository;

pub const CATEGORIES_COLLECTION: &str = "toyCategories";

pub struct MongoCategoryRepository {
    collection: Collection<Category>,
}

impl MongoCategoryRepository {
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, CATEGORIES_COLLECTION)
    }

    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Category>(collection_name);
        Self { collection }
    }

    pub fn collection(&self) -> &Collection<Category> {
        &self.collection
    }

    fn summary_projection() -> Document {
        doc! { "img": 1, "title": 1, "price": 1, "ratings": 1 }
    }
}

#[async_trait]
impl CategoryRepository for MongoCategoryRepository {
    #[instrument(skip(self))]
    async fn list_by_sub_category(
        &self,
        sub_category: &str,
    ) -> CategoryResult<Vec<CategorySummary>> {
        let options = FindOptions::builder()
            .projection(Self::summary_projection())
            .build();

        let cursor = self
            .collection
            .clone_with_type::<CategorySummary>()
            .find(doc! { "subCategory": sub_category })
            .with_options(options)
            .await?;
        let summaries: Vec<CategorySummary> = cursor.try_collect().await?;

        tracing::debug!(count = summaries.len(), "Category cards loaded");
        Ok(summaries)
    }

    #[instrument(skip(self), fields(category_id = %id))]
    async fn get_by_id(&self, id: ObjectId) -> CategoryResult<Option<Category>> {
        let category = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(category)
    }
}
