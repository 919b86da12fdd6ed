use std::io::Write;

use clap::Args;
use rust_decimal::Decimal;

use menuboard::{
    categories::records::CategoryUuid,
    menu::{
        MenuService,
        data::{MenuItemUpdate, NewMenuItem},
        records::MenuItemUuid,
    },
};

use crate::cli::{CliError, render};

#[derive(Debug, Args)]
pub(crate) struct ShowArgs {
    /// Menu item UUID
    #[arg(long)]
    id: MenuItemUuid,
}

#[derive(Debug, Args)]
pub(crate) struct CreateArgs {
    /// Optional menu item UUID; generated when omitted
    #[arg(long)]
    id: Option<MenuItemUuid>,

    /// Dish name
    #[arg(long)]
    name: String,

    /// Image reference
    #[arg(long, default_value = "")]
    image: String,

    /// Current price
    #[arg(long)]
    price: Decimal,

    /// Previous price; always reset to the current price on creation
    #[arg(long)]
    old_price: Option<Decimal>,

    /// Category UUID
    #[arg(long)]
    category: CategoryUuid,
}

#[derive(Debug, Args)]
pub(crate) struct UpdateArgs {
    /// Menu item UUID
    #[arg(long)]
    id: MenuItemUuid,

    /// New dish name
    #[arg(long)]
    name: Option<String>,

    /// New image reference
    #[arg(long)]
    image: Option<String>,

    /// New current price
    #[arg(long)]
    price: Option<Decimal>,

    /// New previous price
    #[arg(long)]
    old_price: Option<Decimal>,

    /// New category UUID
    #[arg(long)]
    category: Option<CategoryUuid>,
}

#[derive(Debug, Args)]
pub(crate) struct DeleteArgs {
    /// Menu item UUID
    #[arg(long)]
    id: MenuItemUuid,
}

pub(crate) async fn list(menu: &dyn MenuService, out: &mut impl Write) -> Result<(), CliError> {
    let items = menu.list_items().await?;

    render::write_items(out, &items)?;

    Ok(())
}

pub(crate) async fn show(
    menu: &dyn MenuService,
    args: ShowArgs,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let item = menu.get_item(args.id).await?;

    render::write_item(out, &item)?;

    Ok(())
}

pub(crate) async fn create(
    menu: &dyn MenuService,
    args: CreateArgs,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let item = menu
        .create_item(NewMenuItem {
            uuid: args.id.unwrap_or_default(),
            name: args.name,
            image: args.image,
            price: args.price,
            old_price: args.old_price.unwrap_or(args.price),
            category: args.category,
        })
        .await?;

    render::write_item(out, &item)?;

    Ok(())
}

pub(crate) async fn update(
    menu: &dyn MenuService,
    args: UpdateArgs,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let item = menu
        .update_item(
            args.id,
            MenuItemUpdate {
                name: args.name,
                image: args.image,
                price: args.price,
                old_price: args.old_price,
                category: args.category,
            },
        )
        .await?;

    render::write_item(out, &item)?;

    Ok(())
}

pub(crate) async fn delete(
    menu: &dyn MenuService,
    args: DeleteArgs,
    out: &mut impl Write,
) -> Result<(), CliError> {
    menu.delete_item(args.id).await?;

    writeln!(out, "deleted menu item {}", args.id)?;

    Ok(())
}
