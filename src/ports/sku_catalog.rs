//! SKU catalog port definition.

use crate::domain::{AppError, CatalogItemId, SkuDescriptor};

/// Port for reading SKU descriptors from the product catalog.
pub trait SkuCatalog {
    /// Fetch the SKU named by `item` as offered in `country_code`.
    ///
    /// Failures are reported as [`AppError::LookupFailed`].
    fn get_sku(&self, country_code: &str, item: &CatalogItemId)
    -> Result<SkuDescriptor, AppError>;
}
