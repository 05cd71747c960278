pub mod api_config;
pub mod loader;

pub use api_config::{CartctlConfig, PartnerApiConfig};
pub use loader::parse_config_content;
