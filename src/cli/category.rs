use std::io::Write;

use clap::{Args, Subcommand};

use menuboard::{
    categories::{
        CategoriesRepository,
        records::{CategoryRecord, CategoryUuid},
    },
    stores::FileStore,
};

use crate::cli::{CliError, render};

#[derive(Debug, Args)]
pub(crate) struct CategoryCommand {
    #[command(subcommand)]
    command: CategorySubcommand,
}

#[derive(Debug, Subcommand)]
enum CategorySubcommand {
    /// Add a category to the menu file
    Add(AddCategoryArgs),

    /// List categories in the menu file
    List,
}

#[derive(Debug, Args)]
struct AddCategoryArgs {
    /// Category display name
    #[arg(long)]
    name: String,

    /// Optional category UUID; generated when omitted
    #[arg(long)]
    id: Option<CategoryUuid>,
}

pub(crate) async fn run(
    command: CategoryCommand,
    store: &FileStore,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command.command {
        CategorySubcommand::Add(args) => {
            let category = store
                .add_category(CategoryRecord {
                    uuid: args.id.unwrap_or_default(),
                    name: args.name,
                })
                .await?;

            writeln!(out, "category_uuid: {}", category.uuid)?;
            writeln!(out, "category_name: {}", category.name)?;
        }
        CategorySubcommand::List => {
            let categories = store.list_categories().await?;

            render::write_categories(out, &categories)?;
        }
    }

    Ok(())
}
