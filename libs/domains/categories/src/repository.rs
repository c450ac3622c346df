use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::CategoryResult;
use crate::models::{Category, CategorySummary};

/// Read access to category cards.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Cards whose `subCategory` equals `sub_category` exactly
    async fn list_by_sub_category(
        &self,
        sub_category: &str,
    ) -> CategoryResult<Vec<CategorySummary>>;

    async fn get_by_id(&self, id: ObjectId) -> CategoryResult<Option<Category>>;
}
