use std::io::Write;

use clap::Args;

use menuboard::{
    featured::{FeaturedPolicy, select_featured_item_with},
    menu::MenuService,
};

use crate::cli::{CliError, render};

#[derive(Debug, Args)]
pub(crate) struct FeaturedArgs {
    /// Selection policy (largest-discount, first-in-order)
    #[arg(long, default_value = "largest-discount")]
    policy: FeaturedPolicy,
}

pub(crate) async fn run(
    menu: &dyn MenuService,
    args: FeaturedArgs,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let items = menu.list_items().await?;
    let featured = select_featured_item_with(&items, args.policy);

    render::write_featured(out, featured)?;

    Ok(())
}
