use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;

use crate::error::CategoryResult;
use crate::models::{Category, CategorySummary};
use crate::repository::CategoryRepository;

pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_sub_category(
        &self,
        sub_category: &str,
    ) -> CategoryResult<Vec<CategorySummary>> {
        self.repository.list_by_sub_category(sub_category).await
    }

    #[instrument(skip(self))]
    pub async fn get_category(&self, id: ObjectId) -> CategoryResult<Option<Category>> {
        self.repository.get_by_id(id).await
    }
}

impl<R: CategoryRepository> Clone for CategoryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
