//! In-memory store.

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::{RwLock, RwLockWriteGuard};

use crate::{
    domain::{
        categories::{
            CategoriesRepository,
            records::{CategoryRecord, CategoryUuid},
        },
        menu::{
            MenuItemsRepository,
            data::MenuItemUpdate,
            records::{MenuItemRecord, MenuItemUuid},
        },
    },
    stores::{MenuDocument, StoreError},
};

/// Item and category store held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: RwLock<MenuDocument>,
}

impl MemoryStore {
    /// Create a store seeded with `document`.
    #[must_use]
    pub fn new(document: MenuDocument) -> Self {
        Self {
            document: RwLock::new(document),
        }
    }

    /// Adds a category.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AlreadyExists`] if the UUID is taken, or
    /// [`StoreError::InvalidData`] if the name is blank.
    pub async fn add_category(
        &self,
        category: CategoryRecord,
    ) -> Result<CategoryRecord, StoreError> {
        self.document.write().await.add_category(category)
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, MenuDocument> {
        self.document.write().await
    }
}

impl MenuDocument {
    pub(crate) fn add_category(
        &mut self,
        category: CategoryRecord,
    ) -> Result<CategoryRecord, StoreError> {
        if category.name.trim().is_empty() {
            return Err(StoreError::InvalidData("category name is empty".to_string()));
        }

        if self.categories.iter().any(|c| c.uuid == category.uuid) {
            return Err(StoreError::AlreadyExists(category.uuid.to_string()));
        }

        self.categories.push(category.clone());

        Ok(category)
    }

    pub(crate) fn create_item(
        &mut self,
        item: MenuItemRecord,
    ) -> Result<MenuItemRecord, StoreError> {
        validate_item(&item)?;

        if self.items.iter().any(|i| i.uuid == item.uuid) {
            return Err(StoreError::AlreadyExists(item.uuid.to_string()));
        }

        self.items.push(item.clone());

        Ok(item)
    }

    /// Leaves the stored record untouched when the merged record is invalid.
    pub(crate) fn update_item(
        &mut self,
        item: MenuItemUuid,
        update: MenuItemUpdate,
    ) -> Result<Option<MenuItemRecord>, StoreError> {
        let Some(stored) = self.items.iter_mut().find(|i| i.uuid == item) else {
            return Ok(None);
        };

        let mut updated = stored.clone();

        update.apply_to(&mut updated);
        validate_item(&updated)?;

        *stored = updated.clone();

        Ok(Some(updated))
    }

    pub(crate) fn delete_item(&mut self, item: MenuItemUuid) {
        self.items.retain(|i| i.uuid != item);
    }
}

fn validate_item(item: &MenuItemRecord) -> Result<(), StoreError> {
    if item.name.trim().is_empty() {
        return Err(StoreError::InvalidData("item name is empty".to_string()));
    }

    for (field, value) in [("price", item.price), ("old_price", item.old_price)] {
        if value < Decimal::ZERO {
            return Err(StoreError::InvalidData(format!(
                "{field} must not be negative, got {value}"
            )));
        }
    }

    Ok(())
}

#[async_trait]
impl MenuItemsRepository for MemoryStore {
    async fn list_items(&self) -> Result<Vec<MenuItemRecord>, StoreError> {
        Ok(self.document.read().await.items.clone())
    }

    async fn get_item(&self, item: MenuItemUuid) -> Result<Option<MenuItemRecord>, StoreError> {
        Ok(self
            .document
            .read()
            .await
            .items
            .iter()
            .find(|i| i.uuid == item)
            .cloned())
    }

    async fn create_item(&self, item: MenuItemRecord) -> Result<MenuItemRecord, StoreError> {
        self.document.write().await.create_item(item)
    }

    async fn update_item(
        &self,
        item: MenuItemUuid,
        update: MenuItemUpdate,
    ) -> Result<Option<MenuItemRecord>, StoreError> {
        self.document.write().await.update_item(item, update)
    }

    async fn delete_item(&self, item: MenuItemUuid) -> Result<(), StoreError> {
        self.document.write().await.delete_item(item);

        Ok(())
    }
}

#[async_trait]
impl CategoriesRepository for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, StoreError> {
        Ok(self.document.read().await.categories.clone())
    }

    async fn get_category(
        &self,
        category: CategoryUuid,
    ) -> Result<Option<CategoryRecord>, StoreError> {
        Ok(self
            .document
            .read()
            .await
            .categories
            .iter()
            .find(|c| c.uuid == category)
            .cloned())
    }
}
