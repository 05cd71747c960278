pub mod cart;
pub mod catalog_item_id;
pub mod configuration;
pub mod error;
pub mod provisioning;
pub mod sku;

pub use cart::{
    Cart, CartLineItem, CartLineItemError, CreatedCart, CreatedLineItem, DEFAULT_FRIENDLY_NAME,
    ProvisioningContext,
};
pub use catalog_item_id::CatalogItemId;
pub use configuration::{CartctlConfig, PartnerApiConfig};
pub use error::AppError;
pub use provisioning::{ProvisioningField, ProvisioningValues};
pub use sku::SkuDescriptor;
