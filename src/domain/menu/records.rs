//! Menu Item Records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{domain::categories::records::CategoryUuid, uuids::TypedUuid};

/// Menu Item UUID
pub type MenuItemUuid = TypedUuid<MenuItemRecord>;

/// Menu Item Record
///
/// The raw item as held by the item store. `category` is a plain reference
/// and may point at a category that no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemRecord {
    /// Item identifier
    pub uuid: MenuItemUuid,

    /// Dish name
    pub name: String,

    /// Image reference (usually a URL)
    pub image: String,

    /// Current price
    pub price: Decimal,

    /// Previous price, the baseline a promotion is measured against
    pub old_price: Decimal,

    /// Referenced category
    pub category: CategoryUuid,
}
