//! Look up a single SKU and display its descriptor.

use tracing::info;

use super::inputs::obtain;
use crate::app::AppContext;
use crate::domain::{AppError, CatalogItemId, SkuDescriptor};
use crate::ports::{Presenter, Prompter, SkuCatalog};

pub const SKU_LABEL: &str = "SKU";

#[derive(Debug, Clone, Default)]
pub struct ShowSkuOptions {
    pub catalog_item_id: Option<String>,
    pub country_code: Option<String>,
}

pub fn execute<C, S, P, D>(
    ctx: &AppContext<C, S, P, D>,
    options: ShowSkuOptions,
) -> Result<SkuDescriptor, AppError>
where
    C: SkuCatalog,
    P: Prompter,
    D: Presenter,
{
    let catalog_item_id = obtain(
        ctx.prompter(),
        options.catalog_item_id,
        "Enter the catalog Item Id",
        "The catalog item ID can't be empty",
    )?;
    let item = CatalogItemId::parse(&catalog_item_id)?;
    let country_code = obtain(
        ctx.prompter(),
        options.country_code,
        "Enter the 2 digit country code of the availability",
        "The country code can't be empty",
    )?;

    info!(product = item.product_id(), sku = item.sku_id(), country = %country_code, "Looking up SKU");
    let sku = ctx.catalog().get_sku(&country_code, &item)?;

    ctx.presenter().show(SKU_LABEL, &sku)?;
    Ok(sku)
}
