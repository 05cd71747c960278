//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration,
//! context creation, and command execution.

use std::path::Path;

use crate::adapters::{ConsolePresenter, DialoguerPrompter, HttpPartnerClient, OutputFormat};
use crate::app::configuration::load_config;
use crate::app::{
    AppContext,
    commands::{create_cart, show_sku},
};

pub use crate::app::commands::create_cart::CreateCartOptions;
pub use crate::app::commands::show_sku::ShowSkuOptions;
pub use crate::domain::{AppError, CreatedCart, SkuDescriptor};

type LiveContext =
    AppContext<HttpPartnerClient, HttpPartnerClient, DialoguerPrompter, ConsolePresenter>;

/// Create an `AppContext` wired to the live partner API and the terminal.
fn create_context(config_path: Option<&Path>, format: OutputFormat) -> Result<LiveContext, AppError> {
    let config = load_config(config_path)?;
    let client = HttpPartnerClient::from_env_with_config(&config.api)?;
    Ok(AppContext::new(
        client.clone(),
        client,
        DialoguerPrompter::new(),
        ConsolePresenter::new(format),
    ))
}

/// Build a cart from SKU requirements and submit it for a customer.
pub fn create_cart(
    config_path: Option<&Path>,
    format: OutputFormat,
    options: CreateCartOptions,
) -> Result<CreatedCart, AppError> {
    let ctx = create_context(config_path, format)?;
    create_cart::execute(&ctx, options)
}

/// Look up and display a SKU descriptor.
pub fn show_sku(
    config_path: Option<&Path>,
    format: OutputFormat,
    options: ShowSkuOptions,
) -> Result<SkuDescriptor, AppError> {
    let ctx = create_context(config_path, format)?;
    show_sku::execute(&ctx, options)
}
