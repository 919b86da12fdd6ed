//! Categories Repository

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::categories::records::{CategoryRecord, CategoryUuid},
    stores::StoreError,
};

/// Read-only source of category records.
#[automock]
#[async_trait]
pub trait CategoriesRepository: Send + Sync {
    /// Retrieves every category in store order.
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, StoreError>;

    /// Retrieves a single category, `None` when no category has the given UUID.
    async fn get_category(
        &self,
        category: CategoryUuid,
    ) -> Result<Option<CategoryRecord>, StoreError>;
}
