//! Configuration parsing.

use crate::domain::{AppError, CartctlConfig};

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<CartctlConfig, AppError> {
    let config: CartctlConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
