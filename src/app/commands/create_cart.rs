//! Create-cart workflow: resolve the SKU, collect provisioning input, preview, submit.

use tracing::{debug, info};

use super::inputs::obtain;
use crate::app::AppContext;
use crate::domain::{
    AppError, Cart, CartLineItem, CatalogItemId, CreatedCart, ProvisioningField,
    ProvisioningValues, SkuDescriptor,
};
use crate::ports::{CartService, Presenter, ProgressScope, Prompter, SkuCatalog};

pub const CART_PREVIEW_LABEL: &str = "Cart to be created";
pub const CREATED_CART_LABEL: &str = "Created cart";
const PROGRESS_LABEL: &str = "Creating cart";

/// Values supplied up front; anything missing is prompted for.
#[derive(Debug, Clone, Default)]
pub struct CreateCartOptions {
    pub customer_id: Option<String>,
    pub catalog_item_id: Option<String>,
    pub country_code: Option<String>,
    /// Used only for fields the SKU actually requests.
    pub provisioning: ProvisioningValues,
}

/// Run the workflow once. Every failure aborts the run; nothing is retried.
pub fn execute<C, S, P, D>(
    ctx: &AppContext<C, S, P, D>,
    options: CreateCartOptions,
) -> Result<CreatedCart, AppError>
where
    C: SkuCatalog,
    S: CartService,
    P: Prompter,
    D: Presenter,
{
    let prompter = ctx.prompter();

    let customer_id = obtain(
        prompter,
        options.customer_id,
        "Enter the ID of the customer making the purchase",
        "The customer ID can't be empty",
    )?;
    let catalog_item_id = obtain(
        prompter,
        options.catalog_item_id,
        "Enter the catalog Item Id",
        "The catalog item ID can't be empty",
    )?;
    let item = CatalogItemId::parse(&catalog_item_id)?;
    let country_code = obtain(
        prompter,
        options.country_code,
        "Enter the 2 digit country code of the availability",
        "The country code can't be empty",
    )?;

    info!(product = item.product_id(), sku = item.sku_id(), country = %country_code, "Looking up SKU");
    let sku = ctx.catalog().get_sku(&country_code, &item)?;

    let provisioning = collect_provisioning(prompter, &sku, &options.provisioning)?;
    let cart = build_cart(&item, &sku, provisioning)?;

    let presenter = ctx.presenter();
    presenter.show(CART_PREVIEW_LABEL, &cart)?;

    info!(customer = %customer_id, catalog_item = %item, "Submitting cart");
    let created = {
        let _progress = ProgressScope::start(presenter, PROGRESS_LABEL);
        ctx.carts().create_cart(&customer_id, &cart)?
    };
    info!(cart_id = created.id.as_deref().unwrap_or("<none>"), "Cart created");

    presenter.show(CREATED_CART_LABEL, &created)?;
    Ok(created)
}

/// Walk the SKU's provisioning variables and gather a value for each recognized one.
///
/// Returns `None` when the SKU requests no provisioning input at all.
pub fn collect_provisioning<P: Prompter>(
    prompter: &P,
    sku: &SkuDescriptor,
    presets: &ProvisioningValues,
) -> Result<Option<ProvisioningValues>, AppError> {
    if !sku.requires_provisioning() {
        return Ok(None);
    }

    let mut values = ProvisioningValues::default();
    for name in sku.provisioning_variables() {
        let Some(field) = ProvisioningField::from_variable_name(name) else {
            debug!(variable = %name, "Skipping unrecognized provisioning variable");
            continue;
        };

        let preset = presets.get(field).map(ToOwned::to_owned);
        let value = obtain(prompter, preset, field.prompt(), field.empty_message())?;
        values.set(field, value);
    }

    Ok(Some(values))
}

/// Assemble the single-line cart for `item`, billed on the SKU's first billing cycle.
pub fn build_cart(
    item: &CatalogItemId,
    sku: &SkuDescriptor,
    provisioning: Option<ProvisioningValues>,
) -> Result<Cart, AppError> {
    let billing_cycle = sku
        .default_billing_cycle()
        .ok_or_else(|| AppError::NoBillingCycle { sku_id: item.sku_id().to_string() })?;

    let context = provisioning.map(|values| values.into_context(sku.duration()));
    let line_item = CartLineItem::single(item, billing_cycle).with_provisioning_context(context);

    Ok(Cart::new(vec![line_item]))
}
