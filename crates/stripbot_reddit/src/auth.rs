//! OAuth password-grant token handling.

use serde::Deserialize;
use std::time::{Duration, Instant};

/// Body of a successful token grant.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
}

/// A bearer token with its expiry deadline.
#[derive(Debug, Clone)]
pub(crate) struct AccessToken {
    secret: String,
    expires_at: Instant,
}

impl AccessToken {
    /// Refresh this long before the deadline to avoid racing the server.
    const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

    pub(crate) fn from_response(response: TokenResponse) -> Self {
        Self {
            secret: response.access_token,
            expires_at: Instant::now() + Duration::from_secs(response.expires_in),
        }
    }

    pub(crate) fn secret(&self) -> &str {
        &self.secret
    }

    pub(crate) fn needs_refresh(&self) -> bool {
        Instant::now() + Self::EXPIRY_MARGIN >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_does_not_need_refresh() {
        let token = AccessToken::from_response(TokenResponse {
            access_token: "abc".to_string(),
            expires_in: 3600,
        });
        assert!(!token.needs_refresh());
        assert_eq!(token.secret(), "abc");
    }

    #[test]
    fn short_lived_token_needs_refresh() {
        let token = AccessToken::from_response(TokenResponse {
            access_token: "abc".to_string(),
            expires_in: 30,
        });
        assert!(token.needs_refresh());
    }
}
