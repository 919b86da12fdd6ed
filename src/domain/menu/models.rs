//! Menu Models

use rust_decimal::Decimal;

use crate::domain::{
    categories::records::{CategoryRecord, CategoryUuid},
    menu::records::{MenuItemRecord, MenuItemUuid},
};

/// Menu Item
///
/// A menu item joined with its category. Built fresh on every read and never
/// written back to a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Item identifier
    pub uuid: MenuItemUuid,

    /// Dish name
    pub name: String,

    /// Image reference
    pub image: String,

    /// Current price
    pub price: Decimal,

    /// Previous price
    pub old_price: Decimal,

    /// The category reference as stored on the item
    pub category_uuid: CategoryUuid,

    /// The resolved category, `None` when the reference is dangling
    pub category: Option<CategoryRecord>,
}

impl MenuItem {
    /// Projects a raw record and its resolved category into a menu item.
    #[must_use]
    pub fn project(record: MenuItemRecord, category: Option<CategoryRecord>) -> Self {
        Self {
            uuid: record.uuid,
            name: record.name,
            image: record.image,
            price: record.price,
            old_price: record.old_price,
            category_uuid: record.category,
            category,
        }
    }

    /// Whether the item is currently sold below its previous price.
    #[must_use]
    pub fn has_promotion(&self) -> bool {
        has_promotion(self.price, self.old_price)
    }

    /// Amount knocked off the previous price. Zero or negative when the item
    /// is not on promotion.
    #[must_use]
    pub fn discount(&self) -> Decimal {
        self.old_price - self.price
    }
}

/// An item is on promotion iff its previous price is strictly greater than
/// its current price.
#[must_use]
pub fn has_promotion(price: Decimal, old_price: Decimal) -> bool {
    old_price > price
}
