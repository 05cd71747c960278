use crate::domain::{AppError, CatalogItemId, SkuDescriptor};
use crate::ports::SkuCatalog;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkuLookup {
    pub country_code: String,
    pub product_id: String,
    pub sku_id: String,
}

#[derive(Clone)]
pub struct FakeSkuCatalog {
    pub lookups: Arc<Mutex<Vec<SkuLookup>>>,
    sku: Option<SkuDescriptor>,
    failure_status: Option<u16>,
}

impl FakeSkuCatalog {
    pub fn returning(sku: SkuDescriptor) -> Self {
        Self { lookups: Arc::new(Mutex::new(vec![])), sku: Some(sku), failure_status: None }
    }

    pub fn failing(status: u16) -> Self {
        Self { lookups: Arc::new(Mutex::new(vec![])), sku: None, failure_status: Some(status) }
    }

    pub fn get_lookups(&self) -> Vec<SkuLookup> {
        self.lookups.lock().unwrap().clone()
    }
}

impl SkuCatalog for FakeSkuCatalog {
    fn get_sku(
        &self,
        country_code: &str,
        item: &CatalogItemId,
    ) -> Result<SkuDescriptor, AppError> {
        self.lookups.lock().unwrap().push(SkuLookup {
            country_code: country_code.to_string(),
            product_id: item.product_id().to_string(),
            sku_id: item.sku_id().to_string(),
        });

        match &self.sku {
            Some(sku) => Ok(sku.clone()),
            None => Err(AppError::LookupFailed {
                message: format!("SKU {} not found", item),
                status: self.failure_status,
            }),
        }
    }
}
