//! Credential loading from the environment.

use stripbot_error::{ConfigError, StripbotResult};

/// Reddit script-app credentials.
///
/// Loaded from the environment variables the deployed bot has always used:
/// `REDDIT_CLIENT_ID`, `REDDIT_CLIENT_SECRET`, `REDDIT_USERNAME`,
/// `REDDIT_PASSWORD`, and optionally `REDDIT_USER_AGENT` (defaulted from
/// the username when unset).
#[derive(Debug, Clone)]
pub struct RedditCredentials {
    /// Script app client id
    pub client_id: String,
    /// Script app client secret
    pub client_secret: String,
    /// Bot account username
    pub username: String,
    /// Bot account password
    pub password: String,
    /// User agent sent on every request
    pub user_agent: String,
}

impl RedditCredentials {
    /// Load credentials from the environment.
    ///
    /// # Errors
    /// Returns a configuration error naming the first missing variable.
    pub fn from_env() -> StripbotResult<Self> {
        let client_id = require("REDDIT_CLIENT_ID")?;
        let client_secret = require("REDDIT_CLIENT_SECRET")?;
        let username = require("REDDIT_USERNAME")?;
        let password = require("REDDIT_PASSWORD")?;
        let user_agent = std::env::var("REDDIT_USER_AGENT")
            .unwrap_or_else(|_| format!("xkcd_bot by /u/{}", username));

        Ok(Self {
            client_id,
            client_secret,
            username,
            password,
            user_agent,
        })
    }
}

fn require(name: &str) -> StripbotResult<String> {
    std::env::var(name)
        .map_err(|_| ConfigError::new(format!("Missing environment variable: {}", name)).into())
}
