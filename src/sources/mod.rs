/// Sources module
///
/// Everything that talks to the provider: the client-credentials token
/// request and the paginated listing client.

pub mod fetch;
pub mod oauth2;
pub mod token;

pub use fetch::{bearer_auth, fetch_all, Page, Query};
pub use oauth2::authenticate;
pub use token::Token;
