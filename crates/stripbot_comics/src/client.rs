//! HTTP client for the xkcd metadata endpoints.

use async_trait::async_trait;
use std::time::Duration;
use stripbot_core::{Comic, ComicNumber};
use stripbot_error::{HttpError, JsonError, StripbotResult};
use stripbot_interface::ComicLookup;
use tracing::{debug, info, warn};

/// Default public endpoint.
const BASE_URL: &str = "https://xkcd.com";

/// Bounded per-request timeout; the upstream API normally answers in well
/// under a second.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the xkcd `info.0.json` endpoints.
///
/// # Example
///
/// ```no_run
/// use stripbot_comics::XkcdClient;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = XkcdClient::new()?;
///
/// // None fetches the latest comic.
/// if let Some(comic) = client.fetch_comic(None).await {
///     println!("#{}: {}", comic.num, comic.title);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct XkcdClient {
    http: reqwest::Client,
    base_url: String,
}

impl XkcdClient {
    /// Create a client against the public xkcd endpoint.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client fails to initialize.
    pub fn new() -> StripbotResult<Self> {
        Self::with_base_url(BASE_URL)
    }

    /// Create a client against an alternate base URL.
    ///
    /// Used by tests to point the client at a local fixture server.
    pub fn with_base_url(base_url: impl Into<String>) -> StripbotResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Resource URL for a comic number, or the latest-comic resource.
    fn info_url(&self, number: Option<ComicNumber>) -> String {
        match number {
            Some(n) => format!("{}/{}/info.0.json", self.base_url, n.get()),
            None => format!("{}/info.0.json", self.base_url),
        }
    }

    /// Fetch comic metadata, surfacing the failure cause.
    ///
    /// Issues exactly one GET. Non-success statuses and undecodable bodies
    /// are errors; no retry happens here.
    async fn try_fetch(&self, number: Option<ComicNumber>) -> StripbotResult<Comic> {
        let url = self.info_url(number);
        debug!(%url, "Fetching comic metadata");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| HttpError::new(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::new(format!("GET {} returned {}", url, status)).into());
        }

        let comic: Comic = response
            .json()
            .await
            .map_err(|e| JsonError::new(format!("Undecodable comic body from {}: {}", url, e)))?;

        info!(num = comic.num, title = %comic.title, "Fetched comic");
        Ok(comic)
    }

    /// Fetch comic metadata, collapsing failures to `None`.
    ///
    /// This is the lookup contract the processor relies on: a `Comic` is
    /// either fully populated or absent.
    pub async fn fetch_comic(&self, number: Option<ComicNumber>) -> Option<Comic> {
        match self.try_fetch(number).await {
            Ok(comic) => Some(comic),
            Err(e) => {
                warn!(error = %e, "Comic lookup failed");
                None
            }
        }
    }
}

#[async_trait]
impl ComicLookup for XkcdClient {
    async fn fetch(&self, number: Option<ComicNumber>) -> Option<Comic> {
        self.fetch_comic(number).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_comic_url() {
        let client = XkcdClient::new().unwrap();
        assert_eq!(client.info_url(None), "https://xkcd.com/info.0.json");
    }

    #[test]
    fn numbered_comic_url() {
        let client = XkcdClient::new().unwrap();
        let number = ComicNumber::parse("353").unwrap();
        assert_eq!(
            client.info_url(Some(number)),
            "https://xkcd.com/353/info.0.json"
        );
    }

    #[test]
    fn base_url_override() {
        let client = XkcdClient::with_base_url("http://127.0.0.1:8080").unwrap();
        assert_eq!(
            client.info_url(None),
            "http://127.0.0.1:8080/info.0.json"
        );
    }
}
