//! Configuration loading from disk and environment.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use url::Url;

use crate::domain::configuration::parse_config_content;
use crate::domain::{AppError, CartctlConfig};

pub const CONFIG_FILE_NAME: &str = "cartctl.toml";
pub const CONFIG_PATH_ENV: &str = "CARTCTL_CONFIG";
pub const API_URL_ENV: &str = "CARTCTL_API_URL";

/// Load configuration, apply environment overrides, and validate.
///
/// An explicit path (or `$CARTCTL_CONFIG`) must exist; `./cartctl.toml` is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<CartctlConfig, AppError> {
    let mut config = match resolve_config_path(explicit)? {
        Some(path) => {
            debug!(path = %path.display(), "Loading configuration");
            let content = fs::read_to_string(&path).map_err(|err| {
                AppError::config_error(format!(
                    "Failed to read config file {}: {}",
                    path.display(),
                    err
                ))
            })?;
            parse_config_content(&content)?
        }
        None => CartctlConfig::default(),
    };

    apply_env_overrides(&mut config)?;
    config.validate()?;
    Ok(config)
}

fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>, AppError> {
    if let Some(path) = explicit {
        return require_existing(path.to_path_buf());
    }

    if let Some(value) = std::env::var_os(CONFIG_PATH_ENV).filter(|value| !value.is_empty()) {
        return require_existing(PathBuf::from(value));
    }

    let local = std::env::current_dir()?.join(CONFIG_FILE_NAME);
    Ok(local.is_file().then_some(local))
}

fn require_existing(path: PathBuf) -> Result<Option<PathBuf>, AppError> {
    if path.is_file() {
        Ok(Some(path))
    } else {
        Err(AppError::config_error(format!("Config file not found: {}", path.display())))
    }
}

fn apply_env_overrides(config: &mut CartctlConfig) -> Result<(), AppError> {
    if let Ok(raw) = std::env::var(API_URL_ENV) {
        let raw = raw.trim();
        if !raw.is_empty() {
            config.api.api_url = Url::parse(raw).map_err(|e| {
                AppError::InvalidConfig(format!("{} is not a valid URL: {}", API_URL_ENV, e))
            })?;
        }
    }
    Ok(())
}
