use clap::Args;

use super::GlobalArgs;
use crate::app::api::{self, ShowSkuOptions};
use crate::domain::AppError;

#[derive(Args)]
pub struct SkuArgs {
    /// Catalog item id in the form <productId>:<skuId>
    catalog_item_id: Option<String>,
    /// Two-letter country code of the availability
    #[arg(long)]
    country: Option<String>,
}

pub fn run_sku(globals: &GlobalArgs, args: SkuArgs) -> Result<(), AppError> {
    let options =
        ShowSkuOptions { catalog_item_id: args.catalog_item_id, country_code: args.country };
    api::show_sku(globals.config.as_deref(), globals.format, options)?;
    Ok(())
}
