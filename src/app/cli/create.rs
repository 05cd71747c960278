use clap::Args;

use super::GlobalArgs;
use crate::adapters::OutputFormat;
use crate::app::api::{self, CreateCartOptions};
use crate::domain::{AppError, ProvisioningField, ProvisioningValues};

#[derive(Args)]
pub struct CreateArgs {
    /// ID of the customer making the purchase
    #[arg(long)]
    customer_id: Option<String>,
    /// Catalog item id in the form <productId>:<skuId>
    #[arg(long)]
    catalog_item_id: Option<String>,
    /// Two-letter country code of the availability
    #[arg(long)]
    country: Option<String>,
    /// Scope value, used when the SKU requests one
    #[arg(long)]
    scope: Option<String>,
    /// Azure subscription id, used when the SKU requests one
    #[arg(long)]
    subscription_id: Option<String>,
}

pub fn run_create(globals: &GlobalArgs, args: CreateArgs) -> Result<(), AppError> {
    let mut provisioning = ProvisioningValues::default();
    if let Some(scope) = args.scope {
        provisioning.set(ProvisioningField::Scope, scope);
    }
    if let Some(subscription_id) = args.subscription_id {
        provisioning.set(ProvisioningField::SubscriptionId, subscription_id);
    }

    let options = CreateCartOptions {
        customer_id: args.customer_id,
        catalog_item_id: args.catalog_item_id,
        country_code: args.country,
        provisioning,
    };

    let created = api::create_cart(globals.config.as_deref(), globals.format, options)?;

    if globals.format == OutputFormat::Pretty {
        for item in created.failed_line_items() {
            let description = item
                .error
                .as_ref()
                .and_then(|error| error.error_description.as_deref())
                .unwrap_or("unspecified error");
            let catalog_item_id = item.catalog_item_id.as_deref().unwrap_or("(unknown item)");
            println!("⚠️  Line item {} was rejected: {}", catalog_item_id, description);
        }
        println!("✅ Created cart {}", created.id.as_deref().unwrap_or("(no id returned)"));
    }
    Ok(())
}
