//! Menu Items Repository

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::menu::{
        data::MenuItemUpdate,
        records::{MenuItemRecord, MenuItemUuid},
    },
    stores::StoreError,
};

/// Persistence for raw menu item records.
#[automock]
#[async_trait]
pub trait MenuItemsRepository: Send + Sync {
    /// Retrieves every item in store order.
    async fn list_items(&self) -> Result<Vec<MenuItemRecord>, StoreError>;

    /// Retrieves a single item, `None` when no item has the given UUID.
    async fn get_item(&self, item: MenuItemUuid) -> Result<Option<MenuItemRecord>, StoreError>;

    /// Writes a new item and returns it as stored.
    async fn create_item(&self, item: MenuItemRecord) -> Result<MenuItemRecord, StoreError>;

    /// Applies `update` to an existing item, `None` when no item has the given UUID.
    async fn update_item(
        &self,
        item: MenuItemUuid,
        update: MenuItemUpdate,
    ) -> Result<Option<MenuItemRecord>, StoreError>;

    /// Removes an item. Removing an unknown item is not an error.
    async fn delete_item(&self, item: MenuItemUuid) -> Result<(), StoreError>;
}
