pub mod extract;

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use http::header::ACCEPT;
use http::{HeaderMap, HeaderValue};
use reqwest::Client;
use tracing::{info, warn};

use crate::config::sources::{ResourceConfig, ServiceConfig};
use crate::errors::InventoryError;
use crate::helpers::time::unix_ts_to_rfc3339;
use crate::sinks::sink_file::write_inventory;
use crate::sources::{authenticate, bearer_auth, fetch_all, Page};
use extract::{flatten_records, user_emails, PhoneInventory};

/// What one run produced.
#[derive(Debug)]
pub struct InventoryReport {
    pub user_emails: BTreeMap<String, String>,
    pub phones: PhoneInventory,
    pub written: Vec<PathBuf>,
}

/// Authenticate, list users, list phone numbers, write the JSON files. Strictly in that order.
///
/// Fails before anything is written when no access token could be obtained.
/// A listing that breaks off mid-way (non-200 page, undecodable page) still
/// produces files from the pages that were received.
pub async fn run(config: &ServiceConfig, client: &Client) -> Result<InventoryReport> {
    info!("attempting authentication to {}", config.auth.url);
    let token = authenticate(client, &config.auth).await?;

    // If a token was not returned, the run cannot continue.
    let Some(access_token) = token.access_token.as_deref().filter(|t| !t.is_empty()) else {
        return Err(InventoryError::AuthDecode { url: config.auth.url.clone() }.into());
    };
    match token.expires_at_unix_ts() {
        Some(expires_at) => info!("authenticated, token expires at {}", unix_ts_to_rfc3339(expires_at)),
        None => info!("authenticated, token expiry unknown"),
    }
    let auth = bearer_auth(access_token)?;

    let resources = &config.api.resources;
    let unassigned_only = config.settings.unassigned_only;

    let user_pages = fetch_resource(config, client, &auth, &resources.users, None).await?;
    let users = flatten_records(&user_pages, &resources.users.records_key);
    info!("fetched {} users in {} pages", users.len(), user_pages.len());
    let user_emails = user_emails(&users);

    let type_filter = unassigned_only.then_some("unassigned");
    let phone_pages =
        fetch_resource(config, client, &auth, &resources.phone_numbers, type_filter).await?;
    let phone_numbers = flatten_records(&phone_pages, &resources.phone_numbers.records_key);
    info!("fetched {} phone numbers in {} pages", phone_numbers.len(), phone_pages.len());

    let phones = if unassigned_only {
        PhoneInventory::from_unassigned_records(&phone_numbers)
    } else {
        PhoneInventory::from_records(&phone_numbers)
    };
    if phones.all_numbers.is_empty() && phones.unassigned_numbers.is_empty() {
        warn!("no phone numbers found");
    }

    let written = write_inventory(&config.settings.output_dir, &user_emails, &phones, unassigned_only).await?;

    Ok(InventoryReport {
        user_emails,
        phones,
        written,
    })
}

async fn fetch_resource(
    config: &ServiceConfig,
    client: &Client,
    auth: &HeaderMap,
    resource: &ResourceConfig,
    type_filter: Option<&str>,
) -> Result<Vec<Page>> {
    let mut query = resource.base_query(config.api.page_size);
    if let Some(type_filter) = type_filter {
        query.insert("type".to_owned(), type_filter.to_owned());
    }

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    fetch_all(client, &config.api.resource_url(resource), Some(auth), &query, &headers).await
}
