//! MongoDB implementation of ToyRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Bson, Document, doc, oid::ObjectId, to_document},
    options::{FindOptions, IndexOptions},
};
use tracing::instrument;

use crate::error::ToyResult;
use crate::models::{DeleteAck, InsertAck, PriceSort, Toy, ToyInput, ToySummary, UpdateAck};
use crate::repository::ToyRepository;

pub const TOYS_COLLECTION: &str = "allToys";

/// MongoDB implementation of the ToyRepository
pub struct MongoToyRepository {
    collection: Collection<Toy>,
}

impl MongoToyRepository {
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoToyRepository::new(client.database("toyParadise"));
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, TOYS_COLLECTION)
    }

    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Toy>(collection_name);
        Self { collection }
    }

    pub fn collection(&self) -> &Collection<Toy> {
        &self.collection
    }

    /// Ensure the title index used by search exists. Idempotent.
    pub async fn create_indexes(&self) -> ToyResult<()> {
        let title_index = IndexModel::builder()
            .keys(doc! { "title": 1 })
            .options(IndexOptions::builder().name("title_1".to_string()).build())
            .build();

        self.collection.create_index(title_index).await?;
        tracing::info!(collection = %self.collection.name(), "Toy indexes ensured");
        Ok(())
    }

    /// Case-insensitive substring match; `text` is matched literally.
    fn search_filter(text: &str) -> Document {
        doc! { "title": { "$regex": regex::escape(text), "$options": "i" } }
    }

    fn seller_filter(seller_email: Option<&str>) -> Document {
        match seller_email {
            Some(email) => doc! { "sellerEmail": email },
            None => doc! {},
        }
    }

    fn seller_options(sort: Option<PriceSort>) -> FindOptions {
        FindOptions::builder()
            .sort(sort.map(|sort| doc! { "price": sort.direction() }))
            .build()
    }

    fn summary_options(limit: i64) -> FindOptions {
        FindOptions::builder()
            .projection(doc! {
                "sellerName": 1,
                "title": 1,
                "subCategory": 1,
                "price": 1,
                "availableQuantity": 1,
            })
            .limit(limit)
            .build()
    }
}

fn bson_id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        other => other.to_string(),
    }
}

#[async_trait]
impl ToyRepository for MongoToyRepository {
    #[instrument(skip(self))]
    async fn search_by_title(&self, text: &str) -> ToyResult<Vec<Toy>> {
        let cursor = self.collection.find(Self::search_filter(text)).await?;
        let toys: Vec<Toy> = cursor.try_collect().await?;
        Ok(toys)
    }

    #[instrument(skip(self))]
    async fn list_summaries(&self, limit: i64) -> ToyResult<Vec<ToySummary>> {
        let cursor = self
            .collection
            .clone_with_type::<ToySummary>()
            .find(doc! {})
            .with_options(Self::summary_options(limit))
            .await?;
        let summaries: Vec<ToySummary> = cursor.try_collect().await?;
        Ok(summaries)
    }

    #[instrument(skip(self), fields(toy_id = %id))]
    async fn get_by_id(&self, id: ObjectId) -> ToyResult<Option<Toy>> {
        let toy = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(toy)
    }

    #[instrument(skip(self))]
    async fn list_by_seller(
        &self,
        seller_email: Option<String>,
        sort: Option<PriceSort>,
    ) -> ToyResult<Vec<Toy>> {
        let cursor = self
            .collection
            .find(Self::seller_filter(seller_email.as_deref()))
            .with_options(Self::seller_options(sort))
            .await?;
        let toys: Vec<Toy> = cursor.try_collect().await?;
        Ok(toys)
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    async fn insert(&self, input: ToyInput) -> ToyResult<InsertAck> {
        let result = self
            .collection
            .clone_with_type::<ToyInput>()
            .insert_one(&input)
            .await?;

        let inserted_id = bson_id_to_string(result.inserted_id);
        tracing::info!(toy_id = %inserted_id, "Toy created");

        Ok(InsertAck {
            acknowledged: true,
            inserted_id,
        })
    }

    #[instrument(skip(self, input), fields(toy_id = %id))]
    async fn replace(&self, id: ObjectId, input: ToyInput) -> ToyResult<UpdateAck> {
        let update = doc! { "$set": to_document(&input)? };
        let result = self
            .collection
            .update_one(doc! { "_id": id }, update)
            .upsert(true)
            .await?;

        let upserted_id = result.upserted_id.map(bson_id_to_string);
        tracing::info!(
            matched = result.matched_count,
            upserted = upserted_id.is_some(),
            "Toy replaced"
        );

        Ok(UpdateAck {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_count: u64::from(upserted_id.is_some()),
            upserted_id,
        })
    }

    #[instrument(skip(self), fields(toy_id = %id))]
    async fn delete(&self, id: ObjectId) -> ToyResult<DeleteAck> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        tracing::info!(deleted = result.deleted_count, "Toy delete processed");
        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: result.deleted_count,
        })
    }
}
