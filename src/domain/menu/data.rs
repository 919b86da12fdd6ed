//! Menu Data

use rust_decimal::Decimal;

use crate::domain::{
    categories::records::CategoryUuid,
    menu::records::{MenuItemRecord, MenuItemUuid},
};

/// New Menu Item Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMenuItem {
    /// Item identifier
    pub uuid: MenuItemUuid,

    /// Dish name
    pub name: String,

    /// Image reference
    pub image: String,

    /// Current price
    pub price: Decimal,

    /// Previous price; replaced by `price` when the item is created
    pub old_price: Decimal,

    /// Referenced category
    pub category: CategoryUuid,
}

impl From<NewMenuItem> for MenuItemRecord {
    fn from(item: NewMenuItem) -> Self {
        Self {
            uuid: item.uuid,
            name: item.name,
            image: item.image,
            price: item.price,
            old_price: item.old_price,
            category: item.category,
        }
    }
}

/// Menu Item Update Data
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItemUpdate {
    /// New dish name
    pub name: Option<String>,

    /// New image reference
    pub image: Option<String>,

    /// New current price
    pub price: Option<Decimal>,

    /// New previous price
    pub old_price: Option<Decimal>,

    /// New category reference
    pub category: Option<CategoryUuid>,
}

impl MenuItemUpdate {
    /// Merges the present fields over `record`.
    pub fn apply_to(self, record: &mut MenuItemRecord) {
        if let Some(name) = self.name {
            record.name = name;
        }

        if let Some(image) = self.image {
            record.image = image;
        }

        if let Some(price) = self.price {
            record.price = price;
        }

        if let Some(old_price) = self.old_price {
            record.old_price = old_price;
        }

        if let Some(category) = self.category {
            record.category = category;
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn record() -> MenuItemRecord {
        MenuItemRecord {
            uuid: MenuItemUuid::new(),
            name: "Moqueca".to_string(),
            image: "moqueca.jpg".to_string(),
            price: Decimal::new(4200, 2),
            old_price: Decimal::new(4200, 2),
            category: CategoryUuid::new(),
        }
    }

    #[test]
    fn empty_update_leaves_record_untouched() {
        let mut item = record();
        let before = item.clone();

        MenuItemUpdate::default().apply_to(&mut item);

        assert_eq!(item, before);
    }

    #[test]
    fn update_replaces_only_present_fields() {
        let mut item = record();
        let category = item.category;

        MenuItemUpdate {
            price: Some(Decimal::new(3500, 2)),
            old_price: Some(Decimal::new(4500, 2)),
            ..MenuItemUpdate::default()
        }
        .apply_to(&mut item);

        assert_eq!(item.name, "Moqueca");
        assert_eq!(item.price, Decimal::new(3500, 2));
        assert_eq!(item.old_price, Decimal::new(4500, 2));
        assert_eq!(item.category, category);
    }
}
