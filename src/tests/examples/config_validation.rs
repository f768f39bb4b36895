use crate::config::proc_loader::parse_config;
use crate::config::proc_validator::validate_service_config;
use crate::errors::InventoryError;
use crate::tests::common::service_config;

const VALID: &str = r#"
settings:
  output_dir: ./out
  logging:
    level: debug
    format: json
auth:
  url: 'https://zoom.us/oauth/token'
  client_id: 'client'
  client_secret: 'secret'
  account_id: '123456'
api:
  base_url: 'https://api.zoom.us/v2'
  page_size: 50
  resources:
    users:
      path: /users
      records_key: users
      query:
        status: active
"#;

#[test]
fn valid_config_parses_with_custom_resources() {
    let config = parse_config(VALID.to_owned()).unwrap();

    assert_eq!(config.api.page_size, 50);
    assert_eq!(config.api.resources.users.path, "/users");
    assert_eq!(
        config.api.resources.users.query.get("status").map(String::as_str),
        Some("active")
    );
    // untouched resource keeps its default
    assert_eq!(config.api.resources.phone_numbers.path, "/phone/numbers");
    assert_eq!(
        config.api.resource_url(&config.api.resources.users),
        "https://api.zoom.us/v2/users"
    );
}

#[test]
fn invalid_config_reports_every_issue() {
    let content = VALID
        .replace("'client'", "''")
        .replace("'secret'", "'  '")
        .replace("page_size: 50", "page_size: 500")
        .replace("path: /users", "path: users")
        .replace("level: debug", "level: verbose");

    let err = parse_config(content).unwrap_err();

    match err.downcast_ref::<InventoryError>() {
        Some(InventoryError::Config(errors)) => {
            assert_eq!(errors.len(), 5, "{:?}", errors);
            assert!(errors.iter().any(|e| e.contains("auth.client_id")));
            assert!(errors.iter().any(|e| e.contains("auth.client_secret")));
            assert!(errors.iter().any(|e| e.contains("page_size")));
            assert!(errors.iter().any(|e| e.contains("users.path")));
            assert!(errors.iter().any(|e| e.contains("logging.level")));
        }
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn rejects_non_http_urls() {
    let mut config = service_config("http://127.0.0.1:1", std::path::PathBuf::from("."));
    config.auth.url = "ftp://zoom.us/oauth/token".to_owned();
    config.api.base_url = "not a url".to_owned();

    let errors = validate_service_config(&config).unwrap_err();

    assert_eq!(errors.len(), 2);
    assert!(errors[0].starts_with("auth.url"));
    assert!(errors[1].starts_with("api.base_url"));
}

#[test]
fn preset_continuation_token_is_rejected() {
    let mut config = service_config("http://127.0.0.1:1", std::path::PathBuf::from("."));
    config
        .api
        .resources
        .phone_numbers
        .query
        .insert("next_page_token".to_owned(), "stale".to_owned());

    let errors = validate_service_config(&config).unwrap_err();
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_helper_config_is_valid() {
    let config = service_config("http://127.0.0.1:1", std::path::PathBuf::from("."));
    assert!(validate_service_config(&config).is_ok());
}
