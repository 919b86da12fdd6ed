use std::{io, sync::Arc};

use clap::{Parser, Subcommand};
use thiserror::Error;

use menuboard::{
    menu::{MenuAggregator, MenuServiceError},
    stores::{FileStore, StoreError},
};

use crate::config::AppConfig;

mod category;
mod featured;
mod items;
mod render;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Menu(#[from] MenuServiceError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

#[derive(Debug, Parser)]
#[command(name = "menuboard", about = "Menuboard CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every menu item
    List,

    /// Show a single menu item
    Show(items::ShowArgs),

    /// Add a menu item
    Create(items::CreateArgs),

    /// Change a menu item
    Update(items::UpdateArgs),

    /// Remove a menu item
    Delete(items::DeleteArgs),

    /// Show the dish of the day
    Featured(featured::FeaturedArgs),

    /// Manage categories
    Category(category::CategoryCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), CliError> {
        let store = Arc::new(FileStore::open(&self.config.menu_file).await?);
        let menu = MenuAggregator::new(store.clone(), store.clone());
        let mut out = io::stdout();

        match self.command {
            Commands::List => items::list(&menu, &mut out).await,
            Commands::Show(args) => items::show(&menu, args, &mut out).await,
            Commands::Create(args) => items::create(&menu, args, &mut out).await,
            Commands::Update(args) => items::update(&menu, args, &mut out).await,
            Commands::Delete(args) => items::delete(&menu, args, &mut out).await,
            Commands::Featured(args) => featured::run(&menu, args, &mut out).await,
            Commands::Category(command) => category::run(command, &store, &mut out).await,
        }
    }
}
