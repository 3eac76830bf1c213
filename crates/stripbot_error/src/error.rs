//! Top-level error wrapper types.

use crate::{ConfigError, HttpError, JsonError, StreamError};

/// Foundation error enum collecting the per-concern error types.
///
/// # Examples
///
/// ```
/// use stripbot_error::{StripbotError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: StripbotError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StripbotErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Comment stream fault
    #[from(StreamError)]
    Stream(StreamError),
}

/// Stripbot error with kind discrimination.
///
/// # Examples
///
/// ```
/// use stripbot_error::{StripbotResult, ConfigError};
///
/// fn might_fail() -> StripbotResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Stripbot Error: {}", _0)]
pub struct StripbotError(Box<StripbotErrorKind>);

impl StripbotError {
    /// Create a new error from a kind.
    pub fn new(kind: StripbotErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StripbotErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to StripbotErrorKind
impl<T> From<T> for StripbotError
where
    T: Into<StripbotErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for stripbot operations.
///
/// # Examples
///
/// ```
/// use stripbot_error::{StripbotResult, HttpError};
///
/// fn fetch_data() -> StripbotResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type StripbotResult<T> = std::result::Result<T, StripbotError>;
