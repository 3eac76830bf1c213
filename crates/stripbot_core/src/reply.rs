//! Reply text rendering.
//!
//! The success format and the attribution footer are the bot's visible
//! identity; they are reproduced here exactly as the deployed bot posts
//! them, field for field.

use crate::Comic;

/// Error reply categories with fixed user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ReplyError {
    /// User-supplied number failed validation
    #[display("invalid_number")]
    InvalidNumber,
    /// No comic exists for the requested number
    #[display("not_found")]
    NotFound,
    /// The host is throttling the bot
    #[display("rate_limit")]
    RateLimit,
    /// Anything else
    #[display("general")]
    General,
}

impl From<&str> for ReplyError {
    /// Map an error-kind name to its category.
    ///
    /// Unrecognized names fall back to [`ReplyError::General`]; that
    /// fallback is part of the reply contract, not a convenience.
    fn from(kind: &str) -> Self {
        match kind {
            "invalid_number" => Self::InvalidNumber,
            "not_found" => Self::NotFound,
            "rate_limit" => Self::RateLimit,
            _ => Self::General,
        }
    }
}

/// Render the success reply for a fetched comic.
///
/// Embeds the title linked to the canonical comic page, the alt text, the
/// direct image URL, and the attribution footer, in that order.
///
/// # Examples
///
/// ```
/// use stripbot_core::{Comic, format_comic};
///
/// let comic = Comic {
///     num: 100,
///     title: "T".to_string(),
///     alt: "A".to_string(),
///     img: "https://x/i.png".to_string(),
/// };
///
/// let reply = format_comic(&comic);
/// assert!(reply.contains("https://xkcd.com/100"));
/// assert!(reply.contains("https://x/i.png"));
/// ```
pub fn format_comic(comic: &Comic) -> String {
    format!(
        "**[{title}](https://xkcd.com/{num})**\n\n{alt}\n\nDirect image link: {img}\n\n^(I am a bot | [Source](https://github.com/samarthrawat1/xkcd-bot))",
        title = comic.title,
        num = comic.num,
        alt = comic.alt,
        img = comic.img,
    )
}

/// Render the apology posted when a lookup comes back absent.
pub fn format_fetch_failure() -> &'static str {
    "Sorry, I couldn't fetch that XKCD comic. Please try again!"
}

/// Render the fixed error message for a reply category.
pub fn format_error(kind: ReplyError) -> &'static str {
    match kind {
        ReplyError::InvalidNumber => {
            "Sorry, that doesn't seem to be a valid comic number. Please try again with a positive number!"
        }
        ReplyError::NotFound => "Sorry, I couldn't find that comic. Please try another number!",
        ReplyError::RateLimit => "I'm a bit busy right now. Please try again in a few minutes!",
        ReplyError::General => "Oops! Something went wrong. Please try again later!",
    }
}
