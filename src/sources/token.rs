use crate::helpers::time::now_u64;

/// Token structure
///
/// Held in memory for one run only; never refreshed and never persisted.
#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: Option<String>,
    /// seconds, as reported by the provider
    pub expires_in: Option<u64>,
    /// token fetching finished at (unix seconds)
    pub fetched_at_unix_ts: u64,
}

impl Token {
    pub fn new(access_token: Option<String>, expires_in: Option<u64>) -> Self {
        Self {
            access_token,
            expires_in,
            fetched_at_unix_ts: now_u64(),
        }
    }

    /// The `(none, none)` result of an undecodable token response.
    pub fn empty() -> Self {
        Self::new(None, None)
    }

    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.expires_in.is_none()
    }

    pub fn expires_at_unix_ts(&self) -> Option<u64> {
        self.expires_in
            .map(|expires_in| self.fetched_at_unix_ts.saturating_add(expires_in))
    }
}
