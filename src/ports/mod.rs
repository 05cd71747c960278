mod cart_service;
mod presenter;
mod prompter;
mod sku_catalog;

pub use cart_service::CartService;
pub use presenter::{Presenter, ProgressScope};
pub use prompter::Prompter;
pub use sku_catalog::SkuCatalog;
