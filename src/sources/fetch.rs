use std::collections::BTreeMap;

use anyhow::Result;
use http::header::AUTHORIZATION;
use http::{HeaderMap, HeaderValue, StatusCode};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

use crate::errors::InventoryError;
use crate::utils::constants::NEXT_PAGE_TOKEN;

/// One decoded response body of a listing endpoint.
pub type Page = Value;

/// Query parameters of a listing request.
pub type Query = BTreeMap<String, String>;

/// `Authorization: Bearer <token>` as a header map for [`fetch_all`].
pub fn bearer_auth(access_token: &str) -> Result<HeaderMap> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", access_token))?;
    value.set_sensitive(true);
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

/// Get all paginated results from `url` / `base_query`.
///
/// While a page carries a `next_page_token`, the token is sent back as the
/// `next_page_token` query parameter of the next request (replacing the
/// previous one). Pages are returned in request order.
///
/// A non-200 status or an undecodable body ends the traversal: pages fetched
/// before it are returned, nothing from that page onward, and the caller is
/// not told the listing was cut short. Transport errors are returned as `Err`.
///
/// Authorization comes either from `auth` or from an `Authorization` entry
/// already present in `headers`; with neither, the call fails with
/// [`InventoryError::AuthMissing`] before any request is sent.
pub async fn fetch_all(
    client: &Client,
    url: &str,
    auth: Option<&HeaderMap>,
    base_query: &Query,
    headers: &HeaderMap,
) -> Result<Vec<Page>> {
    debug!("making GET request to: {}", url);
    debug!("query: {:?}", base_query);

    let mut request_headers = headers.clone();
    match auth {
        Some(auth) if !auth.is_empty() => {
            debug!("adding auth header to headers");
            for (name, value) in auth {
                request_headers.insert(name.clone(), value.clone());
            }
        }
        _ if request_headers.contains_key(AUTHORIZATION) => {}
        _ => {
            error!("did not receive an authentication form (header or parameter)!");
            return Err(InventoryError::AuthMissing { url: url.to_owned() }.into());
        }
    }

    let mut query = base_query.clone();
    let mut pages: Vec<Page> = Vec::new();

    loop {
        let response = client
            .get(url)
            .query(&query)
            .headers(request_headers.clone())
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let err = InventoryError::HttpStatus { url: url.to_owned(), status };
            error!("{}", err);
            error!("reason: {}", status.canonical_reason().unwrap_or("unknown"));
            return Ok(pages);
        }

        let body = response.text().await?;
        let page: Page = match serde_json::from_str(&body) {
            Ok(page) => page,
            Err(e) => {
                let err = InventoryError::BodyDecode { url: url.to_owned(), reason: e.to_string() };
                error!("{}", err);
                return Ok(pages);
            }
        };
        debug!(
            "GET response data size: {}",
            page.as_object().map(|fields| fields.len()).unwrap_or(0)
        );

        // Try to get a next_page_token from the new result
        let next_page = next_page_token(&page);
        pages.push(page);

        match next_page {
            Some(token) => {
                debug!("response has a next page ({} fetched so far)", pages.len());
                query.insert(NEXT_PAGE_TOKEN.to_owned(), token);
            }
            None => return Ok(pages),
        }
    }
}

/// Empty tokens end pagination, same as absent ones.
fn next_page_token(page: &Page) -> Option<String> {
    page.get(NEXT_PAGE_TOKEN)
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
}
