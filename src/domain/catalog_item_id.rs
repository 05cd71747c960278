//! Catalog item identifier (`<productId>:<skuId>`).

use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

const SEPARATOR: char = ':';

/// Compound key naming one purchasable SKU of a catalog product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItemId {
    raw: String,
    product_id: String,
    sku_id: String,
}

impl CatalogItemId {
    /// Parse a catalog item id, requiring exactly two non-empty parts around a single `:`.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        let mut parts = value.split(SEPARATOR);
        let (Some(product_id), Some(sku_id), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(AppError::MalformedIdentifier(value.to_string()));
        };

        if product_id.is_empty() || sku_id.is_empty() {
            return Err(AppError::MalformedIdentifier(value.to_string()));
        }

        Ok(Self {
            raw: value.to_string(),
            product_id: product_id.to_string(),
            sku_id: sku_id.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn sku_id(&self) -> &str {
        &self.sku_id
    }
}

impl FromStr for CatalogItemId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CatalogItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
