use std::path::Path;
use anyhow::{anyhow, Result};

use crate::ServiceConfig;
use crate::config::proc_loader::file_to_config;
use crate::errors::InventoryError;

/// Loads `.env` into the process environment (when present), then the YAML config.
pub fn run(config_path: &str, env_file: &str) -> Result<ServiceConfig> {
    load_env_file(env_file)?;

    let path = Path::new(config_path);
    file_to_config(path).map_err(|e| match e.downcast::<InventoryError>() {
        Ok(invalid) => anyhow!(invalid),
        Err(e) => anyhow!(format!("Invalid config format: {}", e)),
    })
}

/// A missing env file is fine (`Ok(false)`); an unreadable or malformed one is not.
pub fn load_env_file(env_file: &str) -> Result<bool> {
    match dotenv::from_path(Path::new(env_file)) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(anyhow!("failed to load env file '{}': {}", env_file, e)),
    }
}
