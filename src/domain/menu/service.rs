//! Menu service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use crate::domain::{
    categories::{
        CategoriesRepository,
        records::{CategoryRecord, CategoryUuid},
    },
    menu::{
        data::{MenuItemUpdate, NewMenuItem},
        errors::MenuServiceError,
        models::MenuItem,
        records::{MenuItemRecord, MenuItemUuid},
        repository::MenuItemsRepository,
    },
};

/// Joins item records with their categories.
#[derive(Clone)]
pub struct MenuAggregator {
    items: Arc<dyn MenuItemsRepository>,
    categories: Arc<dyn CategoriesRepository>,
}

impl MenuAggregator {
    /// Build an aggregator over the given item and category stores.
    #[must_use]
    pub fn new(
        items: Arc<dyn MenuItemsRepository>,
        categories: Arc<dyn CategoriesRepository>,
    ) -> Self {
        Self { items, categories }
    }

    async fn resolve(&self, record: MenuItemRecord) -> Result<MenuItem, MenuServiceError> {
        let category = self.categories.get_category(record.category).await?;

        Ok(project(record, category))
    }
}

impl fmt::Debug for MenuAggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuAggregator").finish_non_exhaustive()
    }
}

#[async_trait]
impl MenuService for MenuAggregator {
    async fn list_items(&self) -> Result<Vec<MenuItem>, MenuServiceError> {
        let (records, categories) =
            tokio::try_join!(self.items.list_items(), self.categories.list_categories())?;

        let mut by_uuid: FxHashMap<CategoryUuid, CategoryRecord> = FxHashMap::default();

        for category in categories {
            // keep the first record for a repeated uuid
            by_uuid.entry(category.uuid).or_insert(category);
        }

        debug!(
            items = records.len(),
            categories = by_uuid.len(),
            "aggregating menu"
        );

        Ok(records
            .into_iter()
            .map(|record| {
                let category = by_uuid.get(&record.category).cloned();

                project(record, category)
            })
            .collect())
    }

    async fn get_item(&self, item: MenuItemUuid) -> Result<MenuItem, MenuServiceError> {
        let record = self
            .items
            .get_item(item)
            .await?
            .ok_or(MenuServiceError::NotFound)?;

        self.resolve(record).await
    }

    async fn create_item(&self, item: NewMenuItem) -> Result<MenuItem, MenuServiceError> {
        let mut record = MenuItemRecord::from(item);

        record.old_price = record.price;

        let baseline = record.old_price;

        let mut created = self.items.create_item(record).await?;

        created.old_price = baseline;

        info!(item = %created.uuid, "created menu item");

        self.resolve(created).await
    }

    async fn update_item(
        &self,
        item: MenuItemUuid,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuServiceError> {
        let updated = self
            .items
            .update_item(item, update)
            .await?
            .ok_or(MenuServiceError::NotFound)?;

        info!(item = %updated.uuid, "updated menu item");

        self.resolve(updated).await
    }

    async fn delete_item(&self, item: MenuItemUuid) -> Result<(), MenuServiceError> {
        self.items.delete_item(item).await?;

        info!(%item, "deleted menu item");

        Ok(())
    }
}

fn project(record: MenuItemRecord, category: Option<CategoryRecord>) -> MenuItem {
    if category.is_none() {
        warn!(
            item = %record.uuid,
            category = %record.category,
            "menu item references a missing category"
        );
    }

    MenuItem::project(record, category)
}

/// Menu items resolved against their categories.
#[automock]
#[async_trait]
pub trait MenuService: Send + Sync {
    /// Retrieves every menu item, in item store order.
    async fn list_items(&self) -> Result<Vec<MenuItem>, MenuServiceError>;

    /// Retrieve a single menu item.
    async fn get_item(&self, item: MenuItemUuid) -> Result<MenuItem, MenuServiceError>;

    /// Creates a new menu item. The previous price is always reset to the
    /// current price, so a new item is never on promotion.
    async fn create_item(&self, item: NewMenuItem) -> Result<MenuItem, MenuServiceError>;

    /// Updates a menu item with the given UUID.
    async fn update_item(
        &self,
        item: MenuItemUuid,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuServiceError>;

    /// Deletes a menu item. Deleting an unknown UUID succeeds.
    async fn delete_item(&self, item: MenuItemUuid) -> Result<(), MenuServiceError>;
}
