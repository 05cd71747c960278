pub mod create_cart;
mod inputs;
pub mod show_sku;
