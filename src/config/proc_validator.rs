//! Configuration validation with aggregated errors.
//! - Aggregates all issues into Vec<String>
//! - Checks presence of credentials before any request is made
//! - Checks URLs, page size, resource paths and logging level

use reqwest::Url;
use tracing::{error, info};

use crate::config::settings::SettingsConfig;
use crate::config::sources::{ApiConfig, AuthConfig, ResourceConfig, ServiceConfig};
use crate::utils::constants::MAX_PAGE_SIZE;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Public entrypoint: returns Ok(()) or Err(Vec<String>) containing all issues.
pub fn validate_service_config(cfg: &ServiceConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    validate_settings(&cfg.settings, &mut errors);
    validate_auth(&cfg.auth, &mut errors);
    validate_api(&cfg.api, &mut errors);

    if errors.is_empty() {
        info!("config is valid");
        Ok(())
    } else {
        for e in &errors {
            error!("config: {}", e);
        }
        Err(errors)
    }
}

fn validate_settings(settings: &SettingsConfig, errors: &mut Vec<String>) {
    if settings.output_dir.as_os_str().is_empty() {
        errors.push("settings.output_dir must not be empty".to_string());
    }
    if let Some(logging) = &settings.logging {
        if !LOG_LEVELS.contains(&logging.level.as_str()) {
            errors.push(format!(
                "settings.logging.level '{}' is not one of {:?}",
                logging.level, LOG_LEVELS
            ));
        }
    }
}

fn validate_auth(auth: &AuthConfig, errors: &mut Vec<String>) {
    validate_url("auth.url", &auth.url, errors);

    let credentials = &auth.credentials;
    for (field, value) in [
        ("client_id", &credentials.client_id),
        ("client_secret", &credentials.client_secret),
        ("account_id", &credentials.account_id),
    ] {
        if value.trim().is_empty() {
            errors.push(format!("auth.{} is required", field));
        }
    }
}

fn validate_api(api: &ApiConfig, errors: &mut Vec<String>) {
    validate_url("api.base_url", &api.base_url, errors);

    if api.page_size == 0 || api.page_size > MAX_PAGE_SIZE {
        errors.push(format!(
            "api.page_size must be within 1..={}, got {}",
            MAX_PAGE_SIZE, api.page_size
        ));
    }

    validate_resource("users", &api.resources.users, errors);
    validate_resource("phone_numbers", &api.resources.phone_numbers, errors);
}

fn validate_resource(name: &str, resource: &ResourceConfig, errors: &mut Vec<String>) {
    if !resource.path.starts_with('/') {
        errors.push(format!(
            "api.resources.{}.path must start with '/', got '{}'",
            name, resource.path
        ));
    }
    if resource.records_key.trim().is_empty() {
        errors.push(format!("api.resources.{}.records_key must not be empty", name));
    }
    if resource.query.contains_key("next_page_token") {
        errors.push(format!(
            "api.resources.{}.query must not preset 'next_page_token'",
            name
        ));
    }
}

fn validate_url(field: &str, value: &str, errors: &mut Vec<String>) {
    match Url::parse(value) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(format!(
            "{} must use http or https, got '{}'",
            field,
            url.scheme()
        )),
        Err(e) => errors.push(format!("{} '{}' is not a valid url: {}", field, value, e)),
    }
}
