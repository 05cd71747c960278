//! cartctl: build partner commerce carts from catalog SKU provisioning requirements.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::OutputFormat;
pub use app::api::{CreateCartOptions, ShowSkuOptions, create_cart, show_sku};
pub use domain::AppError;
