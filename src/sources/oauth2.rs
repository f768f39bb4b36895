use anyhow::Result;
use http::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

use crate::config::sources::AuthConfig;
use crate::sources::token::Token;
use crate::utils::constants::GRANT_TYPE_ACCOUNT_CREDENTIALS;

/// Retrieve an access token with the server-to-server OAuth
/// `account_credentials` grant.
///
/// `client_id`/`client_secret` go out as HTTP Basic auth, `account_id` in the
/// form body. The status code is not checked: whatever body comes back is
/// decoded, and a body that is not JSON yields [`Token::empty`], which the
/// caller has to treat as a failed authentication. Either field may also be
/// missing from a decoded body.
pub async fn authenticate(client: &Client, auth: &AuthConfig) -> Result<Token> {
    let credentials = &auth.credentials;
    debug!("making auth request to {}", auth.url);

    let form = [
        ("grant_type", GRANT_TYPE_ACCOUNT_CREDENTIALS),
        ("account_id", credentials.account_id.as_str()),
    ];
    let response = client
        .post(&auth.url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .form(&form)
        .send()
        .await?;

    let status = response.status();
    debug!("auth request status: {}", status.as_u16());
    debug!("auth request reason: {}", status.canonical_reason().unwrap_or("unknown"));

    let body = response.text().await?;
    match serde_json::from_str::<Value>(&body) {
        Ok(data) => {
            debug!("auth response has data");
            Ok(token_from_body(&data))
        }
        Err(err) => {
            error!("auth response has no data: {}", err);
            Ok(Token::empty())
        }
    }
}

fn token_from_body(data: &Value) -> Token {
    let access_token = data
        .get("access_token")
        .and_then(Value::as_str)
        .map(str::to_owned);
    let expires_in = data.get("expires_in").and_then(Value::as_u64);
    Token::new(access_token, expires_in)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::extract::Form;
    use axum::routing::post;
    use axum::{Json, Router};
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use http::{HeaderMap, StatusCode};
    use httpmock::Method::POST;
    use httpmock::MockServer;
    use serde_json::json;

    use super::*;
    use crate::config::sources::Credentials;
    use crate::tests::common::{build_reqwest_client, spawn_axum};

    fn auth_config(url: String) -> AuthConfig {
        AuthConfig {
            url,
            credentials: Credentials {
                client_id: "client-id".to_owned(),
                client_secret: "client-secret".to_owned(),
                account_id: "account-1".to_owned(),
            },
        }
    }

    #[tokio::test]
    async fn returns_token_and_expiry_on_success() {
        let server = MockServer::start_async().await;
        let basic = format!("Basic {}", STANDARD.encode("client-id:client-secret"));
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/oauth/token")
                    .header("authorization", basic.as_str());
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!({
                        "access_token": "zoom-abc-123",
                        "token_type": "bearer",
                        "expires_in": 3599,
                        "scope": "phone:read:admin"
                    }));
            })
            .await;

        let client = build_reqwest_client();
        let token = authenticate(&client, &auth_config(server.url("/oauth/token")))
            .await
            .unwrap();

        mock.assert_hits_async(1).await;
        assert_eq!(token.access_token.as_deref(), Some("zoom-abc-123"));
        assert_eq!(token.expires_in, Some(3599));
    }

    #[tokio::test]
    async fn undecodable_body_yields_empty_token() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/oauth/token");
                then.status(502).body("<html>bad gateway</html>");
            })
            .await;

        let client = build_reqwest_client();
        let token = authenticate(&client, &auth_config(server.url("/oauth/token")))
            .await
            .unwrap();

        assert!(token.is_empty());
        assert_eq!(token.access_token, None);
        assert_eq!(token.expires_in, None);
    }

    #[tokio::test]
    async fn error_body_is_decoded_without_status_check() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/oauth/token");
                then.status(400)
                    .json_body(json!({"reason": "Invalid client_id or client_secret", "error": "invalid_client"}));
            })
            .await;

        let client = build_reqwest_client();
        let token = authenticate(&client, &auth_config(server.url("/oauth/token")))
            .await
            .unwrap();

        assert_eq!(token.access_token, None);
        assert_eq!(token.expires_in, None);
    }

    #[tokio::test]
    async fn missing_expiry_is_none() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/oauth/token");
                then.status(200).json_body(json!({"access_token": "no-expiry"}));
            })
            .await;

        let client = build_reqwest_client();
        let token = authenticate(&client, &auth_config(server.url("/oauth/token")))
            .await
            .unwrap();

        assert_eq!(token.access_token.as_deref(), Some("no-expiry"));
        assert_eq!(token.expires_in, None);
    }

    #[tokio::test]
    async fn sends_account_credentials_form() {
        let router = Router::new().route(
            "/oauth/token",
            post(|headers: HeaderMap, Form(form): Form<HashMap<String, String>>| async move {
                let content_type = headers
                    .get("content-type")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_owned();
                let grant_ok = form.get("grant_type").map(String::as_str) == Some("account_credentials");
                let account_ok = form.get("account_id").map(String::as_str) == Some("account-1");
                if content_type == "application/x-www-form-urlencoded" && grant_ok && account_ok && form.len() == 2 {
                    (StatusCode::OK, Json(json!({"access_token": "form-ok", "expires_in": 60})))
                } else {
                    (StatusCode::BAD_REQUEST, Json(json!({"reason": "unexpected form"})))
                }
            }),
        );
        let (handle, addr) = spawn_axum(router).await;

        let client = build_reqwest_client();
        let token = authenticate(&client, &auth_config(format!("http://{}/oauth/token", addr)))
            .await
            .unwrap();

        assert_eq!(token.access_token.as_deref(), Some("form-ok"));
        assert_eq!(token.expires_in, Some(60));
        handle.abort();
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        // nothing listens on the discard port
        let client = build_reqwest_client();
        let result = authenticate(&client, &auth_config("http://127.0.0.1:9/oauth/token".to_owned())).await;
        assert!(result.is_err());
    }
}
