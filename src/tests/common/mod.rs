// tests/common/mod.rs
pub use axum::Router;
pub use tokio::task::JoinHandle;

use std::net::SocketAddr;
use reqwest::Client;

use crate::config::settings::{LogFormat, LoggingConfig, SettingsConfig};
use crate::config::sources::{ApiConfig, AuthConfig, Credentials, ResourcesConfig, ServiceConfig};

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}

/// Config pointing both the auth and the api url at `base` (e.g. "http://127.0.0.1:1234").
pub fn service_config(base: &str, output_dir: std::path::PathBuf) -> ServiceConfig {
    ServiceConfig {
        settings: SettingsConfig {
            output_dir,
            unassigned_only: false,
            logging: Some(LoggingConfig::new("debug".to_owned(), LogFormat::Compact, None)),
        },
        auth: AuthConfig {
            url: format!("{}/oauth/token", base),
            credentials: Credentials {
                client_id: "client-id".to_owned(),
                client_secret: "client-secret".to_owned(),
                account_id: "account-1".to_owned(),
            },
        },
        api: ApiConfig {
            base_url: format!("{}/v2", base),
            page_size: 2,
            resources: ResourcesConfig::default(),
        },
    }
}
