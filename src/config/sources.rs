use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use crate::config::settings::SettingsConfig;
use crate::utils::constants::{
    DEFAULT_PAGE_SIZE, PHONE_NUMBERS_PATH, PHONE_NUMBERS_RECORDS_KEY, USERS_PATH, USERS_RECORDS_KEY,
};


/// ================================
/// Full service configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub settings: SettingsConfig,
    pub auth: AuthConfig,
    pub api: ApiConfig,
}

/// ================================
/// Authentication (server-to-server OAuth)
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub url: String,
    #[serde(flatten)]
    pub credentials: Credentials,
}

/// Client credentials; read-only for the whole run
#[derive(Deserialize, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub account_id: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"********")
            .field("account_id", &self.account_id)
            .finish()
    }
}

/// ================================
/// Listing API
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    /// provider max is 100
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default)]
    pub resources: ResourcesConfig,
}

impl ApiConfig {
    pub fn resource_url(&self, resource: &ResourceConfig) -> String {
        format!("{}{}", self.base_url, resource.path)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResourcesConfig {
    #[serde(default = "default_users")]
    pub users: ResourceConfig,
    #[serde(default = "default_phone_numbers")]
    pub phone_numbers: ResourceConfig,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            users: default_users(),
            phone_numbers: default_phone_numbers(),
        }
    }
}

/// One paginated listing endpoint
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ResourceConfig {
    /// appended to `api.base_url`, starts with '/'
    pub path: String,
    /// key of the records array inside every page
    pub records_key: String,
    /// filters sent with every page request
    #[serde(default)]
    pub query: BTreeMap<String, String>,
}

impl ResourceConfig {
    pub fn new(path: &str, records_key: &str, query: &[(&str, &str)]) -> Self {
        Self {
            path: path.to_owned(),
            records_key: records_key.to_owned(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Query of the first page: `page_size` plus the configured filters.
    pub fn base_query(&self, page_size: u32) -> BTreeMap<String, String> {
        let mut query = self.query.clone();
        query.insert("page_size".to_owned(), page_size.to_string());
        query
    }
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_users() -> ResourceConfig {
    ResourceConfig::new(USERS_PATH, USERS_RECORDS_KEY, &[("status", "activate")])
}

fn default_phone_numbers() -> ResourceConfig {
    ResourceConfig::new(PHONE_NUMBERS_PATH, PHONE_NUMBERS_RECORDS_KEY, &[("type", "all")])
}
