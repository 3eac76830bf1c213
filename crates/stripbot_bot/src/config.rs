//! Bot configuration.
//!
//! TOML-based configuration with a precedence system:
//! - Bundled defaults (include_str! from stripbot.toml)
//! - User overrides (~/.config/stripbot/stripbot.toml, then ./stripbot.toml)
//! - `STRIPBOT_*` environment variables (highest precedence)

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use stripbot_error::{ConfigError, StripbotError, StripbotResult};
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../stripbot.toml");

/// Runtime configuration for the bot.
///
/// Every field has a bundled default, so user config files only need to
/// name the values they change.
///
/// # Example
///
/// ```toml
/// subreddits = ["rust", "programming"]
/// pace_seconds = 2
/// backoff_seconds = 60
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BotConfig {
    /// Subreddits whose comment feeds the bot watches
    #[serde(default = "default_subreddits")]
    pub subreddits: Vec<String>,

    /// Minimum seconds between replies
    #[serde(default = "default_pace_seconds")]
    pub pace_seconds: u64,

    /// Seconds to wait before resubscribing after a stream fault
    #[serde(default = "default_backoff_seconds")]
    pub backoff_seconds: u64,

    /// Seconds between listing polls
    #[serde(default = "default_poll_seconds")]
    pub poll_seconds: u64,

    /// Comments requested per listing page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Bind address for the stats API
    #[serde(default = "default_stats_addr")]
    pub stats_addr: String,
}

fn default_subreddits() -> Vec<String> {
    vec!["test".to_string()]
}

fn default_pace_seconds() -> u64 {
    2
}

fn default_backoff_seconds() -> u64 {
    60
}

fn default_poll_seconds() -> u64 {
    5
}

fn default_page_size() -> u32 {
    100
}

fn default_stats_addr() -> String {
    "127.0.0.1:5000".to_string()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            subreddits: default_subreddits(),
            pace_seconds: default_pace_seconds(),
            backoff_seconds: default_backoff_seconds(),
            poll_seconds: default_poll_seconds(),
            page_size: default_page_size(),
            stats_addr: default_stats_addr(),
        }
    }
}

impl BotConfig {
    /// Load configuration from a specific file path.
    ///
    /// Unspecified fields keep their bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> StripbotResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                StripbotError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StripbotError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: environment > user file > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (stripbot.toml shipped with the crate)
    /// 2. User config in home directory (~/.config/stripbot/stripbot.toml)
    /// 3. User config in current directory (./stripbot.toml)
    /// 4. `STRIPBOT_*` environment variables (e.g. `STRIPBOT_SUBREDDITS=rust,programming`)
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> StripbotResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/stripbot/stripbot.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("stripbot").required(false));

        builder = builder.add_source(
            Environment::with_prefix("STRIPBOT")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("subreddits"),
        );

        builder
            .build()
            .map_err(|e| {
                StripbotError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StripbotError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Minimum spacing between replies.
    pub fn pace_interval(&self) -> Duration {
        Duration::from_secs(self.pace_seconds)
    }

    /// Sleep before resubscribing after a stream fault.
    pub fn backoff_interval(&self) -> Duration {
        Duration::from_secs(self.backoff_seconds)
    }

    /// Spacing between listing polls.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_seconds)
    }
}
