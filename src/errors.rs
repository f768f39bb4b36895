use http::StatusCode;
use thiserror::Error;

/// Failure kinds the inventory run distinguishes.
///
/// `HttpStatus` and `BodyDecode` never reach the caller of a paginated fetch:
/// they are logged and end the fetch with the pages collected before them.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("unable to authenticate: no access token could be decoded from the response of {url}")]
    AuthDecode { url: String },

    #[error("authorization header missing from GET request to {url}")]
    AuthMissing { url: String },

    #[error("non-200 response from {url}: {status}")]
    HttpStatus { url: String, status: StatusCode },

    #[error("response body from {url} could not be decoded: {reason}")]
    BodyDecode { url: String, reason: String },

    #[error("config is not valid: {}", .0.join("; "))]
    Config(Vec<String>),
}
