//! Reddit REST client.
//!
//! Wraps the OAuth token lifecycle, the identity check, the newest-comments
//! listing, and reply posting. Listing and token failures surface as
//! [`StreamError`]s so the supervisor can treat them as stream faults;
//! reply failures stay per-comment.

use crate::auth::{AccessToken, TokenResponse};
use crate::config::RedditCredentials;
use crate::models::Listing;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use stripbot_core::Comment;
use stripbot_error::{HttpError, StreamError, StreamErrorKind, StripbotResult};
use stripbot_interface::ReplySink;
use tokio::sync::Mutex;
use tokio_retry2::{Retry, RetryError, strategy::ExponentialBackoff, strategy::jitter};
use tracing::{debug, info, instrument, warn};

const AUTH_BASE: &str = "https://www.reddit.com";
const API_BASE: &str = "https://oauth.reddit.com";

/// Bounded per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Identity payload from `/api/v1/me`.
#[derive(Debug, Deserialize)]
struct MeResponse {
    name: String,
}

/// Outcome classification for a single reply attempt.
enum ReplyAttempt {
    Transient(stripbot_error::StripbotError),
    Permanent(stripbot_error::StripbotError),
}

/// Authenticated Reddit client.
///
/// # Example
///
/// ```no_run
/// use stripbot_reddit::{RedditClient, RedditCredentials};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = RedditCredentials::from_env()?;
/// let client = RedditClient::new(credentials)?;
///
/// let me = client.me().await?;
/// println!("logged in as u/{}", me);
/// # Ok(())
/// # }
/// ```
pub struct RedditClient {
    http: reqwest::Client,
    credentials: RedditCredentials,
    token: Mutex<Option<AccessToken>>,
    auth_base: String,
    api_base: String,
}

impl std::fmt::Debug for RedditClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedditClient")
            .field("username", &self.credentials.username)
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl RedditClient {
    /// Create a client against the public Reddit endpoints.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client fails to initialize.
    pub fn new(credentials: RedditCredentials) -> StripbotResult<Self> {
        Self::with_base_urls(credentials, AUTH_BASE, API_BASE)
    }

    /// Create a client against alternate endpoints (test fixture servers).
    pub fn with_base_urls(
        credentials: RedditCredentials,
        auth_base: impl Into<String>,
        api_base: impl Into<String>,
    ) -> StripbotResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(credentials.user_agent.clone())
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            credentials,
            token: Mutex::new(None),
            auth_base: auth_base.into(),
            api_base: api_base.into(),
        })
    }

    /// Bearer token secret, fetching or refreshing the grant as needed.
    async fn bearer(&self) -> StripbotResult<String> {
        let mut slot = self.token.lock().await;
        if let Some(token) = slot.as_ref() {
            if !token.needs_refresh() {
                return Ok(token.secret().to_string());
            }
            debug!("Access token near expiry, refreshing");
        }

        let token = self.request_token().await?;
        let secret = token.secret().to_string();
        *slot = Some(token);
        Ok(secret)
    }

    #[instrument(skip(self))]
    async fn request_token(&self) -> StripbotResult<AccessToken> {
        let url = format!("{}/api/v1/access_token", self.auth_base);

        let response = self
            .http
            .post(&url)
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&[
                ("grant_type", "password"),
                ("username", self.credentials.username.as_str()),
                ("password", self.credentials.password.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                StreamError::new(StreamErrorKind::ConnectionFailed(format!(
                    "Token request failed: {}",
                    e
                )))
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(StreamError::new(StreamErrorKind::AuthFailed(format!(
                "Token grant rejected with {}",
                status
            )))
            .into());
        }
        if !status.is_success() {
            return Err(StreamError::new(StreamErrorKind::Http {
                status: status.as_u16(),
                message: "token grant".to_string(),
            })
            .into());
        }

        let body: TokenResponse = response.json().await.map_err(|e| {
            StreamError::new(StreamErrorKind::Decode(format!(
                "Undecodable token body: {}",
                e
            )))
        })?;

        info!("Obtained Reddit access token");
        Ok(AccessToken::from_response(body))
    }

    /// Username of the authenticated account.
    #[instrument(skip(self))]
    pub async fn me(&self) -> StripbotResult<String> {
        let token = self.bearer().await?;
        let url = format!("{}/api/v1/me", self.api_base);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| {
                StreamError::new(StreamErrorKind::ConnectionFailed(format!(
                    "Identity check failed: {}",
                    e
                )))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(StreamError::new(StreamErrorKind::Http {
                status: status.as_u16(),
                message: "identity check".to_string(),
            })
            .into());
        }

        let body: MeResponse = response.json().await.map_err(|e| {
            StreamError::new(StreamErrorKind::Decode(format!(
                "Undecodable identity body: {}",
                e
            )))
        })?;

        Ok(body.name)
    }

    /// Fetch one page of the newest comments across `subreddits`
    /// (a `+`-joined multi path, e.g. `test+programming`).
    #[instrument(skip(self))]
    pub async fn newest_comments(&self, subreddits: &str, limit: u32) -> StripbotResult<Listing> {
        let token = self.bearer().await?;
        let url = format!("{}/r/{}/comments", self.api_base, subreddits);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&token)
            .query(&[("limit", limit.to_string()), ("raw_json", "1".to_string())])
            .send()
            .await
            .map_err(|e| {
                StreamError::new(StreamErrorKind::ConnectionFailed(format!(
                    "Listing request failed: {}",
                    e
                )))
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            // Force a fresh grant on the next call.
            *self.token.lock().await = None;
            return Err(StreamError::new(StreamErrorKind::AuthFailed(format!(
                "Listing rejected with {}",
                status
            )))
            .into());
        }
        if !status.is_success() {
            return Err(StreamError::new(StreamErrorKind::Http {
                status: status.as_u16(),
                message: format!("r/{}", subreddits),
            })
            .into());
        }

        response.json().await.map_err(|e| {
            StreamError::new(StreamErrorKind::Decode(format!(
                "Undecodable listing body: {}",
                e
            )))
            .into()
        })
    }

    /// Post `text` as a child of the thing addressed by `parent_fullname`.
    ///
    /// Transient failures (transport errors, 429, 5xx) are retried with
    /// exponential backoff and jitter; anything else fails immediately.
    #[instrument(skip(self, text))]
    pub async fn post_reply(&self, parent_fullname: &str, text: &str) -> StripbotResult<()> {
        let retry_strategy = ExponentialBackoff::from_millis(2000)
            .factor(2)
            .max_delay(Duration::from_secs(30))
            .map(jitter)
            .take(3);

        Retry::spawn(retry_strategy, || async {
            match self.try_post_reply(parent_fullname, text).await {
                Ok(()) => Ok(()),
                Err(ReplyAttempt::Transient(e)) => {
                    warn!(error = %e, "Transient reply failure, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(ReplyAttempt::Permanent(e)) => {
                    warn!(error = %e, "Permanent reply failure");
                    Err(RetryError::Permanent(e))
                }
            }
        })
        .await
    }

    async fn try_post_reply(
        &self,
        parent_fullname: &str,
        text: &str,
    ) -> Result<(), ReplyAttempt> {
        let token = self
            .bearer()
            .await
            .map_err(ReplyAttempt::Transient)?;
        let url = format!("{}/api/comment", self.api_base);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&token)
            .form(&[
                ("api_type", "json"),
                ("thing_id", parent_fullname),
                ("text", text),
            ])
            .send()
            .await
            .map_err(|e| {
                ReplyAttempt::Transient(
                    HttpError::new(format!("Reply POST failed: {}", e)).into(),
                )
            })?;

        let status = response.status();
        if status.is_success() {
            debug!(parent_fullname, "Reply posted");
            return Ok(());
        }

        let error: stripbot_error::StripbotError =
            HttpError::new(format!("Reply to {} returned {}", parent_fullname, status)).into();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
            Err(ReplyAttempt::Transient(error))
        } else {
            Err(ReplyAttempt::Permanent(error))
        }
    }
}

#[async_trait]
impl ReplySink for RedditClient {
    async fn reply(&self, comment: &Comment, body: &str) -> StripbotResult<()> {
        let fullname = format!("t1_{}", comment.id);
        self.post_reply(&fullname, body).await
    }
}
