use std::{fs, path::Path};
use crate::config::proc_initiateor::initiate_default_values;
use crate::config::sources::ServiceConfig;
use crate::errors::InventoryError;
use crate::utils::constants::DEFAULT_CONFIG_TEMPLATE;
use anyhow::Result;
use regex::Regex;
use tracing::{debug, error};
use crate::config::proc_validator;

/// Load and validate config from YAML file.
/// A missing file falls back to the built-in environment-only template.
pub fn file_to_config(path: &Path) -> Result<ServiceConfig> {
    let content = if path.exists() {
        fs::read_to_string(path)?
    } else {
        debug!("config file {} not found, using built-in template", path.display());
        DEFAULT_CONFIG_TEMPLATE.to_owned()
    };

    let expanded = expand_env_vars(&content)?;
    parse_config(expanded)
}

pub fn parse_config(content: String) -> Result<ServiceConfig> {
    let service_config: ServiceConfig = serde_yaml::from_str(&content)
        .inspect_err(|e| {
            error!("parse config error: {}", e);
        })?;

    let service_config = initiate_default_values(service_config);
    debug!("validation config ...");
    proc_validator::validate_service_config(&service_config).map_err(InventoryError::Config)?;

    Ok(service_config)
}

/// Replaces `${VAR}` and `${VAR:default}` with the environment value.
/// Unset variables without a default become empty strings.
pub fn expand_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{(\w+)(?::([^\}]+))?\}")?;
    let expanded = re.replace_all(input, |caps: &regex::Captures| {
        let var = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        std::env::var(var).unwrap_or_else(|_| default.to_string())
    });
    Ok(expanded.to_string())
}
