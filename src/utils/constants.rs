//! Shared constants and invariants

pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const MAX_PAGE_SIZE: u32 = 100;

pub const GRANT_TYPE_ACCOUNT_CREDENTIALS: &str = "account_credentials";
pub const NEXT_PAGE_TOKEN: &str = "next_page_token";

// Listing endpoints
pub const USERS_PATH: &str = "/phone/users";
pub const USERS_RECORDS_KEY: &str = "users";
pub const PHONE_NUMBERS_PATH: &str = "/phone/numbers";
pub const PHONE_NUMBERS_RECORDS_KEY: &str = "phone_numbers";

// Output files
pub const USER_EMAILS_FILE: &str = "user_emails.json";
pub const USER_PHONE_NUMBERS_FILE: &str = "user_phone_numbers.json";
pub const USER_EXTENSIONS_FILE: &str = "user_extensions.json";
pub const ALL_PHONE_NUMBERS_FILE: &str = "all_phone_numbers.json";
pub const UNASSIGNED_PHONE_NUMBERS_FILE: &str = "unassigned_phone_numbers.json";

/// Used when no config file exists: everything comes from the environment (or `.env`).
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"
settings:
  output_dir: '${OUTPUT_DIR:.}'
  unassigned_only: false
  logging:
    level: '${LOG_LEVEL:info}'
    format: '${LOG_FORMAT:compact}'
    file: '${LOG_FILE}'
auth:
  url: '${ZOOM_AUTH_URL:https://zoom.us/oauth/token}'
  client_id: '${ZOOM_CLIENT_ID}'
  client_secret: '${ZOOM_CLIENT_SECRET}'
  account_id: '${ZOOM_ACCOUNT_ID}'
api:
  base_url: '${ZOOM_API_URL:https://api.zoom.us/v2}'
  page_size: 100
"#;
