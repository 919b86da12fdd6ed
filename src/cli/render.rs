//! Terminal output.

use std::io::{self, Write};

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use menuboard::{categories::records::CategoryRecord, menu::models::MenuItem};

pub(crate) fn write_items(out: &mut impl Write, items: &[MenuItem]) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "no menu items");
    }

    let mut builder = Builder::default();

    builder.push_record(["ID", "Name", "Category", "Price", "Old Price", "Promotion"]);

    for item in items {
        builder.push_record([
            item.uuid.to_string(),
            item.name.clone(),
            category_name(item).to_string(),
            format!("{:.2}", item.price),
            format!("{:.2}", item.old_price),
            (if item.has_promotion() { "yes" } else { "" }).to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(3..5), Alignment::right());

    writeln!(out, "{table}")
}

pub(crate) fn write_item(out: &mut impl Write, item: &MenuItem) -> io::Result<()> {
    writeln!(out, "uuid: {}", item.uuid)?;
    writeln!(out, "name: {}", item.name)?;
    writeln!(out, "image: {}", item.image)?;
    writeln!(out, "category: {}", category_name(item))?;
    writeln!(out, "category_uuid: {}", item.category_uuid)?;
    writeln!(out, "price: {:.2}", item.price)?;
    writeln!(out, "old_price: {:.2}", item.old_price)?;
    writeln!(out, "has_promotion: {}", item.has_promotion())
}

pub(crate) fn write_featured(out: &mut impl Write, featured: Option<&MenuItem>) -> io::Result<()> {
    let Some(item) = featured else {
        return writeln!(out, "no dish of the day");
    };

    writeln!(out, "Dish of the day: {}", item.name)?;
    writeln!(out, "  was {:.2}", item.old_price)?;
    writeln!(out, "  now only {:.2}", item.price)
}

pub(crate) fn write_categories(
    out: &mut impl Write,
    categories: &[CategoryRecord],
) -> io::Result<()> {
    if categories.is_empty() {
        return writeln!(out, "no categories");
    }

    let mut builder = Builder::default();

    builder.push_record(["ID", "Name"]);

    for category in categories {
        builder.push_record([category.uuid.to_string(), category.name.clone()]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());

    writeln!(out, "{table}")
}

fn category_name(item: &MenuItem) -> &str {
    item.category.as_ref().map_or("-", |c| c.name.as_str())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use menuboard::{
        categories::records::CategoryUuid,
        menu::records::{MenuItemRecord, MenuItemUuid},
    };

    use super::*;

    fn item(name: &str, price: i64, old_price: i64) -> MenuItem {
        MenuItem::project(
            MenuItemRecord {
                uuid: MenuItemUuid::new(),
                name: name.to_string(),
                image: "dish.jpg".to_string(),
                price: Decimal::new(price, 2),
                old_price: Decimal::new(old_price, 2),
                category: CategoryUuid::new(),
            },
            None,
        )
    }

    #[test]
    fn items_table_shows_prices_and_missing_category() -> TestResult {
        let mut out = Vec::new();

        write_items(&mut out, &[item("Quindim", 650, 800)])?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("Quindim"), "table should list the item: {text}");
        assert!(text.contains("6.50"), "table should show the price: {text}");
        assert!(text.contains("8.00"), "table should show the old price: {text}");
        assert!(text.contains("yes"), "table should flag the promotion: {text}");

        Ok(())
    }

    #[test]
    fn empty_menu_prints_placeholder() -> TestResult {
        let mut out = Vec::new();

        write_items(&mut out, &[])?;

        assert_eq!(String::from_utf8(out)?, "no menu items\n");

        Ok(())
    }

    #[test]
    fn featured_without_item_prints_placeholder() -> TestResult {
        let mut out = Vec::new();

        write_featured(&mut out, None)?;

        assert_eq!(String::from_utf8(out)?, "no dish of the day\n");

        Ok(())
    }

    #[test]
    fn featured_item_shows_both_prices() -> TestResult {
        let mut out = Vec::new();
        let deal = item("Cuscuz", 1500, 2000);

        write_featured(&mut out, Some(&deal))?;

        let text = String::from_utf8(out)?;

        assert!(text.starts_with("Dish of the day: Cuscuz"), "unexpected output: {text}");
        assert!(text.contains("was 20.00"), "unexpected output: {text}");
        assert!(text.contains("now only 15.00"), "unexpected output: {text}");

        Ok(())
    }
}
